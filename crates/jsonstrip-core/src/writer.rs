// crates/jsonstrip-core/src/writer.rs
use crate::error::{Result, StripError};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Replaces the file at `path` with `doc`, pretty-printed.
///
/// The text goes to a temporary file next to `path` which is flushed, synced
/// and then renamed over the target, so readers see either the old content or
/// the complete new content. If anything fails the temporary file is dropped
/// (and deleted) and `path` keeps its previous content.
///
/// A symlinked `path` is followed: the file it points to is replaced and the
/// link itself stays in place. The target must be writable by the caller, so
/// a read-only file is refused with [`StripError::Write`] even though the
/// rename alone would succeed. The flip side of renaming is that the
/// directory holding the target must be writable too; a writable file inside
/// a read-only directory cannot be rewritten.
///
/// Formatting: `indent` spaces per level, `": "` between key and value, empty
/// containers as `[]` / `{}`, non-ASCII characters written literally, no
/// trailing newline.
pub fn write_document(path: impl AsRef<Path>, doc: &Value, indent: usize) -> Result<()> {
    let path = path.as_ref();
    let target = resolve_target(path).map_err(|e| StripError::write(path, e))?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StripError::write(path, e))?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serialize_into(&mut writer, doc, indent).map_err(|e| StripError::write(path, e))?;
        writer.flush().map_err(|e| StripError::write(path, e))?;
    }
    tmp.as_file()
        .sync_all()
        .map_err(|e| StripError::write(path, e))?;

    // Temp files are created 0600; keep whatever mode the original had.
    if let Ok(meta) = fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| StripError::write(path, e))?;
    }

    tmp.persist(&target)
        .map_err(|e| StripError::write(path, e.error))?;

    info!(path = %path.display(), "rewrote file");
    Ok(())
}

/// Follows symlinks and checks the existing file can be opened for writing.
///
/// A target that vanished since it was read is recreated at `path`.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    let target = match fs::canonicalize(path) {
        Ok(target) => target,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(path.to_path_buf()),
        Err(e) => return Err(e),
    };
    OpenOptions::new().write(true).open(&target)?;
    Ok(target)
}

fn serialize_into<W: Write>(writer: W, doc: &Value, indent: usize) -> io::Result<()> {
    let indent = vec![b' '; indent];
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(&indent));
    doc.serialize(&mut ser).map_err(io::Error::from)
}
