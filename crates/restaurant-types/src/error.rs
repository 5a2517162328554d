//! Validation errors for input records.

use thiserror::Error;

/// Reasons a single input record is rejected before it reaches the store.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The array element is not a JSON object.
    #[error("record is not a JSON object")]
    NotAnObject,

    /// A field has the wrong JSON type.
    #[error("malformed record: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required field is absent or null.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A required string field is empty after trimming.
    #[error("field '{0}' must not be blank")]
    BlankField(&'static str),

    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),

    #[error("price level {0} is outside 0..=4")]
    PriceLevel(i64),

    /// Hours must be structured, not a scalar.
    #[error("field 'hours' must be an object or an array")]
    HoursShape,

    /// No slug was proposed and none could be derived from the name.
    #[error("cannot derive a slug from name '{0}'")]
    EmptySlug(String),
}
