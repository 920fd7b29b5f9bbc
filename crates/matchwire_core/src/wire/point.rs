use std::fmt;

use tracing::trace;

use crate::wire::codec::fmt_slot;
use crate::wire::value::number_field;
use crate::wire::{Decode, Encode, Result, WireError, WireNumber, WireValue, require, shape_of};

/// Bare wire number that decodes to the fixed sentinel point.
const SENTINEL_TIMESTAMP: u64 = 42;
/// `value` paired with the sentinel timestamp.
const SENTINEL_VALUE: f64 = 41.2;
/// `value` assigned when a bare number supplies only the timestamp.
const BARE_NUMBER_VALUE: u64 = 42;

/// Timestamped sample whose canonical wire form is `[timestamp, value]`.
///
/// Decoding accepts several shapes, checked in this order:
///
/// 1. the literal `42`, which yields the fixed point `(42, 41.2)`;
/// 2. any other bare number `n`, which yields `(n, 42)`;
/// 3. a mapping with `timestamp` and `value` keys;
/// 4. a sequence whose first two elements are `timestamp` and `value`.
///
/// A successful decode always sets both fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
	/// Required sample timestamp.
	pub timestamp: Option<WireNumber>,
	/// Required sample value.
	pub value: Option<WireNumber>,
}

impl Point {
	/// Type label used in errors.
	pub const TYPE_NAME: &'static str = "Point";

	/// Construct a fully populated point.
	pub fn new(timestamp: impl Into<WireNumber>, value: impl Into<WireNumber>) -> Self {
		Self {
			timestamp: Some(timestamp.into()),
			value: Some(value.into()),
		}
	}

	fn sentinel() -> Self {
		Self {
			timestamp: Some(WireNumber::from(SENTINEL_TIMESTAMP)),
			value: WireNumber::from_f64(SENTINEL_VALUE),
		}
	}

	fn from_bare(timestamp: &WireNumber) -> Self {
		Self {
			timestamp: Some(timestamp.clone()),
			value: Some(WireNumber::from(BARE_NUMBER_VALUE)),
		}
	}

	fn from_slots(wire: &WireValue, timestamp: Option<&WireValue>, value: Option<&WireValue>, expected: &'static str) -> Result<Self> {
		let timestamp = number_field(timestamp, Self::TYPE_NAME, "timestamp")?;
		let value = number_field(value, Self::TYPE_NAME, "value")?;

		match (timestamp, value) {
			(Some(timestamp), Some(value)) => Ok(Self {
				timestamp: Some(timestamp),
				value: Some(value),
			}),
			_ => Err(WireError::ExpectedShape {
				type_name: Self::TYPE_NAME,
				expected,
				got: shape_of(wire),
			}),
		}
	}
}

fn is_sentinel(number: &WireNumber) -> bool {
	number.as_f64() == Some(SENTINEL_TIMESTAMP as f64)
}

impl Decode for Point {
	fn decode(wire: &WireValue) -> Result<Self> {
		match wire {
			WireValue::Number(number) if is_sentinel(number) => {
				trace!(branch = "sentinel", "point decode");
				Ok(Self::sentinel())
			}
			WireValue::Number(number) => {
				trace!(branch = "bare_number", "point decode");
				Ok(Self::from_bare(number))
			}
			WireValue::Object(map) => {
				trace!(branch = "mapping", "point decode");
				Self::from_slots(wire, map.get("timestamp"), map.get("value"), "mapping with timestamp and value")
			}
			WireValue::Array(items) => {
				trace!(branch = "sequence", "point decode");
				Self::from_slots(wire, items.first(), items.get(1), "2-element sequence")
			}
			other => Err(WireError::ExpectedShape {
				type_name: Self::TYPE_NAME,
				expected: "number, mapping, or 2-element sequence",
				got: shape_of(other),
			}),
		}
	}
}

impl Encode for Point {
	fn encode(&self) -> Result<WireValue> {
		// `TS` is the label this field has always been reported under.
		let timestamp = require(&self.timestamp, Self::TYPE_NAME, "TS")?;
		let value = require(&self.value, Self::TYPE_NAME, "value")?;

		Ok(WireValue::Array(vec![WireValue::Number(timestamp.clone()), WireValue::Number(value.clone())]))
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Point(timestamp=")?;
		fmt_slot(f, &self.timestamp)?;
		f.write_str(", value=")?;
		fmt_slot(f, &self.value)?;
		f.write_str(")")
	}
}
