//! Error types for restaurant seeding.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems with the input file. Any of these aborts the run before the
/// store is touched.
#[derive(Error, Debug)]
pub enum InputError {
    #[error(
        "Input file not found: {}. Run the restaurant fetch step first to generate it.",
        .path.display()
    )]
    Missing { path: PathBuf },

    #[error("Failed to read input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file {} is not a JSON array of restaurants: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A single record that could not be seeded. The run continues past it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{name}: {cause}")]
pub struct RecordError {
    /// Zero-based position in the input array.
    pub index: usize,
    pub name: String,
    pub place_id: Option<String>,
    pub cause: String,
}
