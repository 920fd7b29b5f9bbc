use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::wire::{Data, Decode, Encode, Interface, One, Point, Result, Two, Type, WireError, WireValue};

/// Decodable type selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireKind {
	/// [`Data`] record.
	Data,
	/// [`Point`] sample.
	Point,
	/// [`One`] variant, decoded directly.
	One,
	/// [`Two`] variant, decoded directly.
	Two,
	/// [`Interface`] union, dispatched on its discriminator.
	Interface,
	/// [`Type`] wrapper.
	Type,
}

impl WireKind {
	/// Every kind, in declaration order.
	pub const ALL: [Self; 6] = [Self::Data, Self::Point, Self::One, Self::Two, Self::Interface, Self::Type];

	/// Render kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Data => "data",
			Self::Point => "point",
			Self::One => "one",
			Self::Two => "two",
			Self::Interface => "interface",
			Self::Type => "type",
		}
	}
}

impl FromStr for WireKind {
	type Err = WireError;

	fn from_str(name: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str() == name)
			.ok_or_else(|| WireError::UnknownKind { name: name.to_owned() })
	}
}

impl fmt::Display for WireKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Typed value produced by [`decode_as`].
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
	/// Decoded [`Data`].
	Data(Data),
	/// Decoded [`Point`].
	Point(Point),
	/// Decoded [`One`].
	One(One),
	/// Decoded [`Two`].
	Two(Two),
	/// Decoded [`Interface`].
	Interface(Interface),
	/// Decoded [`Type`].
	Type(Type),
}

impl Decoded {
	/// Kind of the held value.
	pub fn kind(&self) -> WireKind {
		match self {
			Self::Data(_) => WireKind::Data,
			Self::Point(_) => WireKind::Point,
			Self::One(_) => WireKind::One,
			Self::Two(_) => WireKind::Two,
			Self::Interface(_) => WireKind::Interface,
			Self::Type(_) => WireKind::Type,
		}
	}

	/// Encode the held value; unions encode through their concrete variant.
	pub fn encode(&self) -> Result<WireValue> {
		match self {
			Self::Data(item) => item.encode(),
			Self::Point(item) => item.encode(),
			Self::One(item) | Self::Interface(Interface::One(item)) => item.encode(),
			Self::Two(item) | Self::Interface(Interface::Two(item)) => item.encode(),
			Self::Type(item) => item.encode(),
		}
	}
}

impl fmt::Display for Decoded {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Data(item) => fmt::Display::fmt(item, f),
			Self::Point(item) => fmt::Display::fmt(item, f),
			Self::One(item) => fmt::Display::fmt(item, f),
			Self::Two(item) => fmt::Display::fmt(item, f),
			Self::Interface(item) => fmt::Display::fmt(item, f),
			Self::Type(item) => fmt::Display::fmt(item, f),
		}
	}
}

/// Decode `wire` as the type named by `kind`.
pub fn decode_as(kind: WireKind, wire: &WireValue) -> Result<Decoded> {
	debug!(kind = kind.as_str(), "decode");
	Ok(match kind {
		WireKind::Data => Decoded::Data(Data::decode(wire)?),
		WireKind::Point => Decoded::Point(Point::decode(wire)?),
		WireKind::One => Decoded::One(One::decode(wire)?),
		WireKind::Two => Decoded::Two(Two::decode(wire)?),
		WireKind::Interface => Decoded::Interface(Interface::decode(wire)?),
		WireKind::Type => Decoded::Type(Type::decode(wire)?),
	})
}

/// Decode `wire` as `kind` and re-encode it into canonical form.
pub fn canonicalize(kind: WireKind, wire: &WireValue) -> Result<WireValue> {
	decode_as(kind, wire)?.encode()
}
