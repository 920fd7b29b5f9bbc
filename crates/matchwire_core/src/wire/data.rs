use std::fmt;

use crate::wire::codec::fmt_slot;
use crate::wire::value::{expect_map, string_field};
use crate::wire::{Decode, Encode, Result, WireMap, WireValue, require};

/// Named record carried by every union variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Data {
	/// Required record name.
	pub name: Option<String>,
}

impl Data {
	/// Type label used in errors.
	pub const TYPE_NAME: &'static str = "Data";

	/// Construct a fully populated record.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: Some(name.into()) }
	}
}

impl Decode for Data {
	fn decode(wire: &WireValue) -> Result<Self> {
		let map = expect_map(wire, Self::TYPE_NAME)?;
		let name = string_field(map.get("name"), Self::TYPE_NAME, "name")?;
		Ok(Self { name })
	}
}

impl Encode for Data {
	fn encode(&self) -> Result<WireValue> {
		let name = require(&self.name, Self::TYPE_NAME, "name")?;

		let mut map = WireMap::new();
		map.insert("name".to_owned(), WireValue::String(name.clone()));
		Ok(WireValue::Object(map))
	}
}

impl fmt::Display for Data {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Data(name=")?;
		fmt_slot(f, &self.name)?;
		f.write_str(")")
	}
}
