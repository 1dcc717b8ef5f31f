//! Record loading from JSON.
//!
//! The source is a JSON array of objects, one per cube. Key order inside
//! each object is preserved.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::{LoadError, Result};
use crate::records::CubeRecord;

/// Parse records from a JSON string.
///
/// ```
/// use cube_catalog::load::parse_records;
///
/// let records = parse_records(r#"[{"Nom": "A", "Element": "Feu"}]"#).unwrap();
/// assert_eq!(records.len(), 1);
/// ```
pub fn parse_records(json: &str) -> Result<Vec<CubeRecord>> {
    let records: Vec<CubeRecord> = serde_json::from_str(json)?;
    tracing::info!(count = records.len(), "parsed cube records");
    Ok(records)
}

/// Read records from any reader.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CubeRecord>> {
    let records: Vec<CubeRecord> = serde_json::from_reader(reader)?;
    tracing::info!(count = records.len(), "read cube records");
    Ok(records)
}

/// Load records from a file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<CubeRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read_records(BufReader::new(file)).inspect_err(|err| {
        tracing::error!(path = %path.display(), error = %err, "failed to load cube records");
    })
}
