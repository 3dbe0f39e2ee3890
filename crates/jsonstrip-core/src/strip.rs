// crates/jsonstrip-core/src/strip.rs
use crate::common::StripStats;
use crate::loader::kind_of;
use serde_json::Value;
use tracing::{debug, info};

/// Removes `field` from every top-level record of `doc`.
///
/// Only direct elements of a top-level array are looked at. Elements that are
/// not objects, and anything nested below a record, are left alone even when
/// they contain a key of the same name. The remaining keys keep their order.
///
/// If `doc` is not an array nothing happens and the returned stats are all
/// zero.
///
/// # Examples
/// ```rust
/// use jsonstrip_core::strip_field;
/// use serde_json::json;
///
/// let mut doc = json!([{"id": 1, "local_image_raw": "x"}, {"id": 2}]);
/// let stats = strip_field(&mut doc, "local_image_raw");
///
/// assert_eq!(stats.removed, 1);
/// assert_eq!(doc, json!([{"id": 1}, {"id": 2}]));
/// ```
pub fn strip_field(doc: &mut Value, field: &str) -> StripStats {
    let Value::Array(records) = doc else {
        info!(kind = kind_of(doc), "top-level value is not an array; nothing to strip");
        return StripStats::default();
    };

    let removed = records
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .filter_map(|record| record.shift_remove(field))
        .count();

    debug!(field, records = records.len(), removed, "stripped records");
    StripStats {
        is_array: true,
        records: records.len(),
        removed,
    }
}
