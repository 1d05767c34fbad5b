#![deny(unsafe_code)]

use std::fs;
use std::path::Path;

use plate_model::RawRecord;
use tracing::{debug, info};

use crate::IngestError;

const INLINE_SOURCE: &str = "<inline>";

/// Load the hand-authored plate descriptions from a JSON array on disk.
///
/// The whole document is validated before anything is returned: a single
/// malformed record aborts the load.
pub fn load_raw_records(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    info!(path = %path.display(), "reading raw records");
    let content = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let records = parse_records_from(path, &content)?;
    info!(
        path = %path.display(),
        record_count = records.len(),
        "raw records loaded"
    );
    Ok(records)
}

/// Parse raw records from an in-memory JSON document.
pub fn parse_raw_records(json: &str) -> Result<Vec<RawRecord>, IngestError> {
    parse_records_from(Path::new(INLINE_SOURCE), json)
}

fn parse_records_from(path: &Path, json: &str) -> Result<Vec<RawRecord>, IngestError> {
    let records: Vec<RawRecord> =
        serde_json::from_str(json).map_err(|error| IngestError::from_json(path, &error))?;
    for record in &records {
        debug!(
            key = %record.key,
            version = %record.version,
            attribute_count = record.description.len(),
            "parsed record"
        );
    }
    Ok(records)
}
