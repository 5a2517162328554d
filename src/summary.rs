//! Run summary.

use crate::error::RecordError;
use std::time::Duration;
use tracing::{info, warn};

/// Counters and failures from a seeding run.
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    /// Restaurants created (or that would be, in a dry run).
    pub created: u64,
    /// Restaurants updated (or that would be, in a dry run).
    pub updated: u64,
    /// Records that failed; each one also appears in `failures`.
    pub errors: u64,
    /// Restaurants in the store after the run.
    pub total: u64,
    pub failures: Vec<RecordError>,
    pub duration: Duration,
}

impl SeedSummary {
    /// Records that made it into the store.
    pub fn processed(&self) -> u64 {
        self.created + self.updated
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Log the final summary lines.
    pub fn log(&self) {
        info!(
            "Seeding complete in {:?}: {} created, {} updated, {} errors",
            self.duration, self.created, self.updated, self.errors
        );
        info!("Total restaurants in store: {}", self.total);
        if self.has_errors() {
            warn!("{} restaurants failed; fix the input and re-run to retry them", self.errors);
        }
    }
}
