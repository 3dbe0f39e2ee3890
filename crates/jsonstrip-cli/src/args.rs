use clap::{ArgAction, Parser};
use jsonstrip_core::{StripOptions, DEFAULT_FIELD, DEFAULT_INDENT};
use std::path::PathBuf;

/// CLI arguments for jsonstrip
#[derive(Debug, Parser)]
#[command(
    name = "jsonstrip",
    version,
    about = "Remove a field from every record of a JSON array file, rewriting it in place"
)]
pub struct CliArgs {
    /// Path to the JSON file to rewrite
    pub path: PathBuf,

    /// Key to remove from each top-level record
    #[arg(short = 'f', long = "field", env = "JSONSTRIP_FIELD", default_value = DEFAULT_FIELD)]
    pub field: String,

    /// Spaces per indentation level in the rewritten file
    #[arg(long = "indent", default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    /// Report what would be removed without touching the file
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Print the result as a single JSON object
    #[arg(long = "json")]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    pub fn options(&self) -> StripOptions {
        StripOptions::new(self.field.clone())
            .with_indent(self.indent)
            .dry_run(self.dry_run)
    }

    /// Default log level when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
