//! Error types for the PostgreSQL store.

use thiserror::Error;
use tokio_postgres::error::SqlState;

/// Errors that can occur while talking to PostgreSQL.
#[derive(Error, Debug)]
pub enum PostgreSQLStoreError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Insert collided with a unique constraint.
    #[error("Unique constraint '{constraint}' violated: {message}")]
    UniqueViolation { constraint: String, message: String },

    /// Table name is not a plain or schema-qualified identifier.
    #[error("Invalid table name '{0}'")]
    InvalidTableName(String),

    /// Update matched no row.
    #[error("No restaurant with place id '{0}'")]
    NotFound(String),
}

impl PostgreSQLStoreError {
    /// Lift unique violations out of the generic database error.
    pub fn classify(err: tokio_postgres::Error) -> Self {
        if err.code() == Some(&SqlState::UNIQUE_VIOLATION) {
            if let Some(db) = err.as_db_error() {
                return Self::UniqueViolation {
                    constraint: db.constraint().unwrap_or("unknown").to_string(),
                    message: db.message().to_string(),
                };
            }
        }
        Self::PostgreSQL(err)
    }
}
