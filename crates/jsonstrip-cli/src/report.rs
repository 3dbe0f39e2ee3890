use jsonstrip_core::StripStats;
use serde::Serialize;
use std::path::Path;

/// Human-readable lines printed after a successful run.
///
/// The removal line only appears when the document was an array.
pub fn summary_lines(field: &str, stats: &StripStats, written: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    if stats.is_array {
        lines.push(format!("Removed {field} from {} items.", stats.removed));
    }
    lines.push(if written {
        "Successfully updated file.".to_string()
    } else {
        "Dry run: file left unchanged.".to_string()
    });
    lines
}

/// Machine-readable form of the same result, for `--json`.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub path: String,
    pub field: &'a str,
    #[serde(flatten)]
    pub stats: StripStats,
    pub written: bool,
}

pub fn summary_json<'a>(
    path: &Path,
    field: &'a str,
    stats: &StripStats,
    written: bool,
) -> Summary<'a> {
    Summary {
        path: path.display().to_string(),
        field,
        stats: *stats,
        written,
    }
}
