use crate::wire::{Result, WireValue};

/// Build a typed value from a wire tree without mutating it.
pub trait Decode: Sized {
	/// Decode `wire` into `Self`.
	fn decode(wire: &WireValue) -> Result<Self>;
}

/// Emit the canonical wire form of a typed value.
///
/// Encoding is all-or-nothing: a missing required field fails the whole call.
pub trait Encode {
	/// Encode `self` into its canonical wire form.
	fn encode(&self) -> Result<WireValue>;
}

/// Render an optional field for `Display` output.
pub(crate) fn fmt_slot<T: std::fmt::Display>(f: &mut std::fmt::Formatter<'_>, slot: &Option<T>) -> std::fmt::Result {
	match slot {
		Some(value) => write!(f, "{value}"),
		None => f.write_str("null"),
	}
}
