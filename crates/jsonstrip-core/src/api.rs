// crates/jsonstrip-core/src/api.rs
use crate::common::StripStats;
use crate::error::Result;
use crate::loader::load_document;
use crate::options::StripOptions;
use crate::strip::strip_field;
use crate::writer::write_document;
use std::path::Path;
use tracing::debug;

/// Removes `field` from every top-level record of the JSON file at `path`.
///
/// Shorthand for [`strip_file`] with default formatting (4-space indent) and
/// the write enabled.
pub fn strip_field_from_file(path: impl AsRef<Path>, field: &str) -> Result<StripStats> {
    strip_file(path, &StripOptions::new(field))
}

/// Runs one load → strip → save cycle on `path`.
///
/// 1. The file is read and parsed in full; failure here is
///    [`StripError::ReadOrParse`](crate::StripError::ReadOrParse) and nothing
///    is written.
/// 2. [`strip_field`] removes `opts.field` from the top-level records.
/// 3. Unless `opts.dry_run` is set, the document is written back atomically
///    even when it was not an array or nothing was removed. Failure here is
///    [`StripError::Write`](crate::StripError::Write) and the file keeps its
///    previous content.
pub fn strip_file(path: impl AsRef<Path>, opts: &StripOptions) -> Result<StripStats> {
    let path = path.as_ref();

    let mut doc = load_document(path)?;
    let stats = strip_field(&mut doc, &opts.field);

    if opts.dry_run {
        debug!(path = %path.display(), "dry run, not writing");
        return Ok(stats);
    }

    write_document(path, &doc, opts.indent)?;
    Ok(stats)
}
