// crates/jsonstrip-core/src/options.rs

/// Key removed when no other field is requested.
pub const DEFAULT_FIELD: &str = "local_image_raw";

/// Spaces per nesting level in the rewritten file.
pub const DEFAULT_INDENT: usize = 4;

/// Knobs for a single [`strip_file`](crate::strip_file) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOptions {
    /// Exact key removed from each top-level record.
    pub field: String,
    /// Indentation width of the pretty-printed output.
    pub indent: usize,
    /// Strip in memory and report, but leave the file untouched.
    pub dry_run: bool,
}

impl StripOptions {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD.to_string(),
            indent: DEFAULT_INDENT,
            dry_run: false,
        }
    }
}
