//! jsonstrip-cli
//! =============
//!
//! Command-line interface for [`jsonstrip-core`].
//!
//! The binary (`jsonstrip`) removes one field from every record of a JSON
//! array file and rewrites the file in place. This library target holds the
//! argument definitions and report formatting so they can be tested.
//!
//! Basic usage:
//!
//! ```text
//! jsonstrip assets/anime_1000.json
//! jsonstrip --field thumbnail --indent 2 data.json
//! jsonstrip --dry-run --json data.json
//! ```
//!
//! For programmatic access use the [`jsonstrip-core`] crate directly.
//!
//! [`jsonstrip-core`]: https://docs.rs/jsonstrip-core
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod report;
