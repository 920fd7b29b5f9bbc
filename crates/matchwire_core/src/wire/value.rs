use crate::wire::{Result, WireError};

/// Generic decoded wire tree consumed by decoders and produced by encoders.
pub type WireValue = serde_json::Value;
/// Key-ordered wire mapping (insertion order is preserved).
pub type WireMap = serde_json::Map<String, WireValue>;
/// Wire number, kept in its parsed integer or float representation.
pub type WireNumber = serde_json::Number;

/// Stable lowercase label for the runtime shape of a wire value.
pub fn shape_of(value: &WireValue) -> &'static str {
	match value {
		WireValue::Null => "null",
		WireValue::Bool(_) => "bool",
		WireValue::Number(_) => "number",
		WireValue::String(_) => "string",
		WireValue::Array(_) => "sequence",
		WireValue::Object(_) => "mapping",
	}
}

/// Borrow `wire` as a mapping or fail with a shape error for `type_name`.
pub(crate) fn expect_map<'a>(wire: &'a WireValue, type_name: &'static str) -> Result<&'a WireMap> {
	match wire {
		WireValue::Object(map) => Ok(map),
		other => Err(WireError::ExpectedShape {
			type_name,
			expected: "mapping",
			got: shape_of(other),
		}),
	}
}

/// Treat wire `null` the same as a missing slot.
pub(crate) fn present(value: Option<&WireValue>) -> Option<&WireValue> {
	value.filter(|item| !item.is_null())
}

/// Decode an optional string slot.
pub(crate) fn string_field(value: Option<&WireValue>, type_name: &'static str, field: &'static str) -> Result<Option<String>> {
	match present(value) {
		None => Ok(None),
		Some(WireValue::String(text)) => Ok(Some(text.clone())),
		Some(other) => Err(mismatch(type_name, field, "string", other)),
	}
}

/// Decode an optional number slot.
pub(crate) fn number_field(value: Option<&WireValue>, type_name: &'static str, field: &'static str) -> Result<Option<WireNumber>> {
	match present(value) {
		None => Ok(None),
		Some(WireValue::Number(number)) => Ok(Some(number.clone())),
		Some(other) => Err(mismatch(type_name, field, "number", other)),
	}
}

fn mismatch(type_name: &'static str, field: &'static str, expected: &'static str, got: &WireValue) -> WireError {
	WireError::FieldTypeMismatch {
		type_name,
		field,
		expected,
		got: shape_of(got),
	}
}
