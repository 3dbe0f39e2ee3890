// crates/jsonstrip-core/src/lib.rs

//! jsonstrip-core
//! ==============
//!
//! Removes one named field from every record of a JSON array stored in a
//! file, and rewrites the file in place.
//!
//! ```rust,no_run
//! use jsonstrip_core::strip_field_from_file;
//!
//! let stats = strip_field_from_file("anime.json", "local_image_raw")?;
//! println!("Removed local_image_raw from {} items.", stats.removed);
//! # Ok::<(), jsonstrip_core::StripError>(())
//! ```
//!
//! The file is parsed fully into memory, stripped in one pass over the
//! top-level array, and replaced through a temporary file plus rename so a
//! failed write never leaves it truncated.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod common;
pub mod error;
pub mod loader;
pub mod options;
pub mod strip;
pub mod writer;

// Re-exports
pub use crate::api::{strip_field_from_file, strip_file};
pub use crate::common::StripStats;
pub use crate::error::{Result, StripError};
pub use crate::loader::load_document;
pub use crate::options::{StripOptions, DEFAULT_FIELD, DEFAULT_INDENT};
pub use crate::strip::strip_field;
pub use crate::writer::write_document;
