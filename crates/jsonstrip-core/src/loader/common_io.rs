// crates/jsonstrip-core/src/loader/common_io.rs
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens `path` for buffered reading.
///
/// The I/O error is folded into a `serde_json::Error` so that "cannot open"
/// and "cannot parse" travel through the same error variant.
pub fn open_stream(path: &Path) -> Result<BufReader<File>, serde_json::Error> {
    let file = File::open(path).map_err(serde_json::Error::io)?;
    Ok(BufReader::new(file))
}
