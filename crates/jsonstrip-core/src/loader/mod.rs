// crates/jsonstrip-core/src/loader/mod.rs

//! # Document Loader
//!
//! Handles the physical layer (opening and buffering the file) and hands the
//! stream to `serde_json`. The whole document is materialized in memory; there
//! is no incremental parsing.

use crate::error::{Result, StripError};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

mod common_io;

/// Reads and parses the JSON document stored at `path`.
///
/// Open failures and syntax errors both surface as
/// [`StripError::ReadOrParse`].
pub fn load_document(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path).map_err(|e| StripError::read(path, e))?;
    let doc: Value = serde_json::from_reader(reader).map_err(|e| StripError::read(path, e))?;

    debug!(path = %path.display(), kind = kind_of(&doc), "loaded document");
    Ok(doc)
}

/// Short name of the top-level JSON type, for logs.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
