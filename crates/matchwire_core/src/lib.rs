//! Structural wire codec: shape-matched decoding, tagged-union dispatch, and canonical encoding.

/// Wire value helpers, typed records, document loading, and kind dispatch.
pub mod wire;
