/// Kind-selected decode command.
pub mod decode;
/// Document-level information command.
pub mod info;
/// Shared CLI helpers.
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;
