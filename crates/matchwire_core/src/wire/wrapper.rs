use std::fmt;

use crate::wire::codec::fmt_slot;
use crate::wire::value::present;
use crate::wire::{Decode, Encode, Result, WireError, WireMap, WireValue, require, shape_of};

/// Scalar-or-wrapper value, always encoded as `{ "data": <value> }`.
///
/// A bare string decodes straight into `data`, so decoding then encoding a string turns it into
/// the mapping form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Type {
	/// Required payload, kept as raw wire data.
	pub data: Option<WireValue>,
}

impl Type {
	/// Type label used in errors.
	pub const TYPE_NAME: &'static str = "Type";

	/// Construct a wrapper around `data`.
	pub fn new(data: impl Into<WireValue>) -> Self {
		Self { data: Some(data.into()) }
	}
}

impl Decode for Type {
	fn decode(wire: &WireValue) -> Result<Self> {
		match wire {
			WireValue::String(_) => Ok(Self { data: Some(wire.clone()) }),
			WireValue::Object(map) => Ok(Self {
				data: present(map.get("data")).cloned(),
			}),
			other => Err(WireError::ExpectedShape {
				type_name: Self::TYPE_NAME,
				expected: "string or mapping",
				got: shape_of(other),
			}),
		}
	}
}

impl Encode for Type {
	fn encode(&self) -> Result<WireValue> {
		let data = require(&self.data, Self::TYPE_NAME, "data")?;

		let mut map = WireMap::new();
		map.insert("data".to_owned(), data.clone());
		Ok(WireValue::Object(map))
	}
}

impl fmt::Display for Type {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Type(data=")?;
		fmt_slot(f, &self.data)?;
		f.write_str(")")
	}
}
