use std::fmt;

use tracing::debug;

use crate::wire::codec::fmt_slot;
use crate::wire::value::{expect_map, present, string_field};
use crate::wire::{Data, Decode, Encode, Result, WireError, WireMap, WireValue, require};

/// Wire key carrying the union discriminator.
pub const DISCRIMINATOR_KEY: &str = "type";

/// One concrete alternative of [`Interface`].
///
/// Variants share the `{ name, data }` body and differ only in their discriminators.
pub trait Variant: Sized {
	/// Discriminator value routed to this variant on decode.
	const TAG: &'static str;
	/// Discriminator value stamped on encode.
	const TYPE: &'static str;
	/// Type label used in errors and `Display`.
	const TYPE_NAME: &'static str;

	/// Assemble the variant from decoded fields.
	fn from_parts(name: Option<String>, data: Option<Data>) -> Self;
	/// Borrow the `name` attribute.
	fn name(&self) -> &Option<String>;
	/// Borrow the `data` attribute.
	fn data(&self) -> &Option<Data>;
}

fn decode_variant<V: Variant>(wire: &WireValue) -> Result<V> {
	let map = expect_map(wire, V::TYPE_NAME)?;
	let name = string_field(map.get("name"), V::TYPE_NAME, "name")?;
	let data = present(map.get("data")).map(Data::decode).transpose()?;
	Ok(V::from_parts(name, data))
}

fn encode_variant<V: Variant>(variant: &V) -> Result<WireValue> {
	let name = require(variant.name(), V::TYPE_NAME, "name")?;
	let data = require(variant.data(), V::TYPE_NAME, "data")?.encode()?;

	let mut map = WireMap::new();
	map.insert(DISCRIMINATOR_KEY.to_owned(), WireValue::String(V::TYPE.to_owned()));
	map.insert("name".to_owned(), WireValue::String(name.clone()));
	map.insert("data".to_owned(), data);
	Ok(WireValue::Object(map))
}

fn fmt_variant<V: Variant>(variant: &V, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{}(name=", V::TYPE_NAME)?;
	fmt_slot(f, variant.name())?;
	f.write_str(", data=")?;
	fmt_slot(f, variant.data())?;
	f.write_str(")")
}

macro_rules! variant_type {
	($(#[$meta:meta])* $ident:ident, tag = $tag:literal, type = $ty:literal) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Default, PartialEq, Eq)]
		pub struct $ident {
			/// Required variant name.
			pub name: Option<String>,
			/// Required nested record.
			pub data: Option<Data>,
		}

		impl $ident {
			/// Construct a fully populated variant.
			pub fn new(name: impl Into<String>, data: Data) -> Self {
				Self {
					name: Some(name.into()),
					data: Some(data),
				}
			}
		}

		impl Variant for $ident {
			const TAG: &'static str = $tag;
			const TYPE: &'static str = $ty;
			const TYPE_NAME: &'static str = concat!("Interface.", $ty);

			fn from_parts(name: Option<String>, data: Option<Data>) -> Self {
				Self { name, data }
			}

			fn name(&self) -> &Option<String> {
				&self.name
			}

			fn data(&self) -> &Option<Data> {
				&self.data
			}
		}

		impl Decode for $ident {
			fn decode(wire: &WireValue) -> Result<Self> {
				decode_variant(wire)
			}
		}

		impl Encode for $ident {
			fn encode(&self) -> Result<WireValue> {
				encode_variant(self)
			}
		}

		impl fmt::Display for $ident {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				fmt_variant(self, f)
			}
		}
	};
}

variant_type!(
	/// Variant selected by discriminator `"one"`, encoded as `"One"`.
	One,
	tag = "one",
	type = "One"
);

variant_type!(
	/// Variant selected by discriminator `"two"`, encoded as `"Two"`.
	Two,
	tag = "two",
	type = "Two"
);

/// Closed tagged union over [`One`] and [`Two`].
///
/// There is no union-level encode; encode the held variant instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interface {
	/// Held [`One`] variant.
	One(One),
	/// Held [`Two`] variant.
	Two(Two),
}

impl Interface {
	/// Type label used in errors.
	pub const TYPE_NAME: &'static str = "Interface";

	/// Name shared by every variant.
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::One(item) => item.name.as_deref(),
			Self::Two(item) => item.name.as_deref(),
		}
	}

	/// Discriminator the held variant stamps on encode.
	pub fn variant_type(&self) -> &'static str {
		match self {
			Self::One(_) => One::TYPE,
			Self::Two(_) => Two::TYPE,
		}
	}
}

impl Decode for Interface {
	fn decode(wire: &WireValue) -> Result<Self> {
		let map = expect_map(wire, Self::TYPE_NAME)?;
		let discriminator = present(map.get(DISCRIMINATOR_KEY));
		debug!(discriminator = ?discriminator, "interface decode");

		match discriminator {
			Some(WireValue::String(tag)) if tag == One::TAG => One::decode(wire).map(Self::One),
			Some(WireValue::String(tag)) if tag == Two::TAG => Two::decode(wire).map(Self::Two),
			Some(WireValue::String(tag)) => Err(WireError::UnknownVariant {
				discriminator: Some(tag.clone()),
			}),
			Some(other) => Err(WireError::UnknownVariant {
				discriminator: Some(other.to_string()),
			}),
			None => Err(WireError::UnknownVariant { discriminator: None }),
		}
	}
}

impl fmt::Display for Interface {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::One(item) => fmt::Display::fmt(item, f),
			Self::Two(item) => fmt::Display::fmt(item, f),
		}
	}
}

#[cfg(test)]
mod tests;
