use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors produced while loading, decoding, and encoding wire values.
#[derive(Debug, Error)]
pub enum WireError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input bytes are not a valid JSON document.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Raw input exceeded the configured byte limit.
	#[error("input too large: size={size}, limit={limit}")]
	InputTooLarge {
		/// Raw input length in bytes.
		size: usize,
		/// Configured byte ceiling.
		limit: usize,
	},
	/// Decompressed input exceeded the configured byte limit.
	#[error("decompressed data exceeds limit ({limit} bytes)")]
	DecompressedTooLarge {
		/// Configured byte ceiling.
		limit: usize,
	},
	/// Input is zstd-compressed but compressed input was disabled.
	#[error("compressed input is disabled (zstd frame detected)")]
	CompressedInputDisabled,
	/// Requested kind name is not one of the decodable types.
	#[error("unknown kind: {name}")]
	UnknownKind {
		/// User-provided kind name.
		name: String,
	},
	/// Encode found a required attribute absent.
	#[error("{field}: is a required field (in {type_name})")]
	MissingField {
		/// Type being encoded.
		type_name: &'static str,
		/// Field label reported for the absent attribute.
		field: &'static str,
	},
	/// Tagged-union discriminator was missing or unrecognized.
	#[error("bad type: {}", .discriminator.as_deref().unwrap_or("<missing>"))]
	UnknownVariant {
		/// Discriminator as found on the wire, `None` when absent or null.
		discriminator: Option<String>,
	},
	/// Decoder input had the wrong overall shape.
	#[error("{type_name}: expected {expected}, got {got}")]
	ExpectedShape {
		/// Type being decoded.
		type_name: &'static str,
		/// Accepted shape description.
		expected: &'static str,
		/// Shape actually found.
		got: &'static str,
	},
	/// A present field held the wrong kind of value.
	#[error("{type_name}.{field}: expected {expected}, got {got}")]
	FieldTypeMismatch {
		/// Type being decoded.
		type_name: &'static str,
		/// Field being decoded.
		field: &'static str,
		/// Expected value kind.
		expected: &'static str,
		/// Value kind actually found.
		got: &'static str,
	},
}
