use crate::wire::{Result, WireError};

/// Borrow a required attribute, or fail with [`WireError::MissingField`].
pub fn require<'a, T>(slot: &'a Option<T>, type_name: &'static str, field: &'static str) -> Result<&'a T> {
	slot.as_ref().ok_or(WireError::MissingField { type_name, field })
}
