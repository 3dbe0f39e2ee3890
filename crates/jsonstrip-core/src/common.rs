// crates/jsonstrip-core/src/common.rs
use serde::Serialize;

/// Outcome of one stripping pass.
///
/// Returned by [`strip_field`](crate::strip_field) and
/// [`strip_file`](crate::strip_file). When the document is not an array,
/// `records` and `removed` are both zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StripStats {
    /// Whether the top-level value was an array.
    pub is_array: bool,
    /// Number of top-level elements scanned.
    pub records: usize,
    /// Number of records the field was actually removed from.
    pub removed: usize,
}
