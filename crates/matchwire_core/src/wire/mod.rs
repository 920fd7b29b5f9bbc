mod codec;
mod compression;
mod data;
mod document;
mod error;
mod interface;
mod kind;
mod point;
mod required;
mod value;
mod wrapper;

/// Decode and encode capabilities.
pub use codec::{Decode, Encode};
/// Compression detection result.
pub use compression::{Compression, ZSTD_MAGIC};
/// Named record type.
pub use data::Data;
/// Document loading entry points and options.
pub use document::{LoadOptions, WireDocument};
/// Error and result aliases.
pub use error::{Result, WireError};
/// Tagged union and its variants.
pub use interface::{DISCRIMINATOR_KEY, Interface, One, Two, Variant};
/// Kind-selected decoding entry points.
pub use kind::{Decoded, WireKind, canonicalize, decode_as};
/// Shape-polymorphic sample type.
pub use point::Point;
/// Shared required-field check.
pub use required::require;
/// Wire value aliases and shape labels.
pub use value::{WireMap, WireNumber, WireValue, shape_of};
/// Scalar-or-wrapper type.
pub use wrapper::Type;
