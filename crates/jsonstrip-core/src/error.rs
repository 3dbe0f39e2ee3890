// crates/jsonstrip-core/src/error.rs
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of the load → strip → save cycle.
///
/// There are exactly two kinds. Anything that goes wrong before the document
/// is fully in memory is [`StripError::ReadOrParse`]; anything that goes wrong
/// while replacing the file is [`StripError::Write`]. In both cases the file
/// on disk still holds its previous content.
#[derive(Debug, Error)]
pub enum StripError {
    /// The file is missing, unreadable, or does not contain valid JSON.
    #[error("failed to read {}: {source}", path.display())]
    ReadOrParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be written back over the file.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StripError {
    pub(crate) fn read(path: &Path, source: serde_json::Error) -> Self {
        StripError::ReadOrParse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        StripError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            StripError::ReadOrParse { path, .. } | StripError::Write { path, .. } => path,
        }
    }

    /// `true` when the input file did not exist at all.
    pub fn is_not_found(&self) -> bool {
        match self {
            StripError::ReadOrParse { source, .. } => {
                source.io_error_kind() == Some(io::ErrorKind::NotFound)
            }
            StripError::Write { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, StripError>;
