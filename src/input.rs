//! Input file loading.

use crate::error::InputError;
use restaurant_types::{parse_record, record_label, Restaurant, ValidationError};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Default input location, next to the package sources.
pub const DEFAULT_INPUT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/restaurants.json");

/// One element of the input array, validated once at load time.
#[derive(Debug)]
pub struct InputRecord {
    /// Zero-based position in the input array.
    pub index: usize,
    /// Name used in log lines, available even when validation failed.
    pub label: String,
    pub parsed: Result<Restaurant, ValidationError>,
}

impl InputRecord {
    pub fn from_value(index: usize, value: &Value) -> Self {
        Self {
            index,
            label: record_label(value, index),
            parsed: parse_record(value),
        }
    }
}

/// Read and validate the input file.
///
/// A missing file, an unreadable file, or a top-level value that is not an
/// array are fatal. Problems with individual elements are kept per record.
pub async fn load_input(path: &Path) -> Result<Vec<InputRecord>, InputError> {
    let contents = match tokio::fs::read(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(InputError::Missing {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(InputError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let values: Vec<Value> =
        serde_json::from_slice(&contents).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let records: Vec<InputRecord> = values
        .iter()
        .enumerate()
        .map(|(index, value)| InputRecord::from_value(index, value))
        .collect();

    let invalid = records.iter().filter(|r| r.parsed.is_err()).count();
    info!(
        "Loaded {} restaurants from {} ({} invalid)",
        records.len(),
        path.display(),
        invalid
    );
    for record in records.iter().filter(|r| r.parsed.is_err()) {
        debug!("Record {} ({}) failed validation", record.index, record.label);
    }

    Ok(records)
}
