use std::fs;
use std::path::Path;

use tracing::debug;

use crate::wire::compression::decode_bytes;
use crate::wire::{Compression, DISCRIMINATOR_KEY, Result, WireValue};

/// Input limits and behavior switches for document loading.
#[derive(Debug, Clone)]
pub struct LoadOptions {
	/// Maximum document size in bytes, checked after decompression.
	pub max_bytes: usize,
	/// Accept zstd-compressed input.
	pub allow_zstd: bool,
}

impl Default for LoadOptions {
	fn default() -> Self {
		Self {
			max_bytes: 64 * 1024 * 1024,
			allow_zstd: true,
		}
	}
}

/// Parsed wire document and how it was stored.
#[derive(Debug, Clone)]
pub struct WireDocument {
	/// Compression detected on the source bytes.
	pub compression: Compression,
	/// Length of the parsed (decompressed) JSON text.
	pub len: usize,
	/// Root wire value.
	pub root: WireValue,
}

impl WireDocument {
	/// Read and parse a document from `path`.
	pub fn open(path: impl AsRef<Path>, opt: &LoadOptions) -> Result<Self> {
		let path = path.as_ref();
		debug!(path = %path.display(), "open wire document");
		Self::from_bytes(fs::read(path)?, opt)
	}

	/// Parse a document from raw, possibly compressed, bytes.
	pub fn from_bytes(raw: Vec<u8>, opt: &LoadOptions) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw, opt.allow_zstd, opt.max_bytes)?;
		let root = serde_json::from_slice(&bytes)?;
		debug!(compression = compression.as_str(), len = bytes.len(), "parsed wire document");

		Ok(Self {
			compression,
			len: bytes.len(),
			root,
		})
	}

	/// Discriminator value on a mapping root, if any.
	pub fn discriminator(&self) -> Option<&WireValue> {
		self.root.get(DISCRIMINATOR_KEY).filter(|value| !value.is_null())
	}
}
