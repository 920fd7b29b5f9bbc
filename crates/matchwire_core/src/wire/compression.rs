use std::io::Read;

use crate::wire::{Result, WireError};

/// zstd frame magic used by compressed wire documents.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed bytes.
	None,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}

	/// Detect compression from the leading bytes of `raw`.
	pub fn detect(raw: &[u8]) -> Self {
		if raw.starts_with(&ZSTD_MAGIC) { Self::Zstd } else { Self::None }
	}
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub(crate) fn decode_bytes(raw: Vec<u8>, allow_zstd: bool, limit: usize) -> Result<(Compression, Vec<u8>)> {
	match Compression::detect(&raw) {
		Compression::None => {
			if raw.len() > limit {
				return Err(WireError::InputTooLarge { size: raw.len(), limit });
			}
			Ok((Compression::None, raw))
		}
		Compression::Zstd if !allow_zstd => Err(WireError::CompressedInputDisabled),
		Compression::Zstd => Ok((Compression::Zstd, decode_zstd(&raw, limit)?)),
	}
}

fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(WireError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}
