//! The seeding loop.
//!
//! Records are processed strictly in input order. Each one is looked up by
//! place id and then either updated in place or created under a unique slug.
//! A failure is confined to its record: it is logged, counted, and the loop
//! moves on. Only failing to count the store at the end aborts the run.

use crate::error::RecordError;
use crate::input::InputRecord;
use crate::summary::SeedSummary;
use anyhow::{Context, Result};
use restaurant_store::RestaurantStore;
use restaurant_types::{slug, Restaurant, StoredRestaurant};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Default number of successful records between progress lines.
pub const DEFAULT_PROGRESS_EVERY: u64 = 20;

/// Seeding options.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Log progress after every this many created + updated records.
    pub progress_every: u64,
    /// Resolve outcomes against the store but skip every write.
    pub dry_run: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            progress_every: DEFAULT_PROGRESS_EVERY,
            dry_run: false,
        }
    }
}

/// What happened to a record that was seeded successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new restaurant was inserted under `slug`.
    Created { slug: String },
    /// The existing restaurant's supplied fields were rewritten.
    Updated,
}

/// Upserts input records into a [`RestaurantStore`].
pub struct Seeder<'a, S: RestaurantStore> {
    store: &'a S,
    config: SeedConfig,
}

impl<'a, S: RestaurantStore> Seeder<'a, S> {
    pub fn new(store: &'a S, config: SeedConfig) -> Self {
        Self { store, config }
    }

    /// Seed every record in order and report the totals.
    pub async fn run(&self, records: &[InputRecord]) -> Result<SeedSummary> {
        let start_time = Instant::now();
        let mut summary = SeedSummary::default();

        info!("Seeding {} restaurants", records.len());
        if self.config.dry_run {
            info!("Running in dry-run mode - no data will be written");
        }

        for record in records {
            match self.seed_one(record).await {
                Ok(Outcome::Created { slug }) => {
                    debug!("Created {} as {slug}", record.label);
                    summary.created += 1;
                }
                Ok(Outcome::Updated) => {
                    debug!("Updated {}", record.label);
                    summary.updated += 1;
                }
                Err(e) => {
                    warn!("Error seeding {}: {}", e.name, e.cause);
                    summary.errors += 1;
                    summary.failures.push(e);
                    continue;
                }
            }

            let processed = summary.processed();
            if self.config.progress_every > 0 && processed % self.config.progress_every == 0 {
                info!(
                    "Progress: {processed} restaurants processed ({} created, {} updated)",
                    summary.created, summary.updated
                );
            }
        }

        summary.duration = start_time.elapsed();
        summary.total = match self.store.count().await {
            Ok(total) => total,
            Err(e) => {
                warn!(
                    "Seeding stopped before the final count: {} created, {} updated, {} errors",
                    summary.created, summary.updated, summary.errors
                );
                return Err(e.context("Failed to count restaurants after seeding"));
            }
        };

        Ok(summary)
    }

    /// Seed a single record. Every failure, including validation, is returned
    /// as a [`RecordError`].
    pub async fn seed_one(&self, record: &InputRecord) -> Result<Outcome, RecordError> {
        let restaurant = record.parsed.as_ref().map_err(|e| RecordError {
            index: record.index,
            name: record.label.clone(),
            place_id: None,
            cause: e.to_string(),
        })?;

        self.upsert(restaurant).await.map_err(|e| RecordError {
            index: record.index,
            name: record.label.clone(),
            place_id: Some(restaurant.place_id.clone()),
            cause: format!("{e:#}"),
        })
    }

    async fn upsert(&self, restaurant: &Restaurant) -> Result<Outcome> {
        let existing = self
            .store
            .find_by_place_id(&restaurant.place_id)
            .await
            .context("lookup by place id failed")?;

        if existing.is_some() {
            if !self.config.dry_run {
                self.store
                    .update_details(&restaurant.place_id, &restaurant.details)
                    .await
                    .context("update failed")?;
            }
            return Ok(Outcome::Updated);
        }

        let slug = resolve_unique_slug(self.store, &restaurant.slug)
            .await
            .context("slug resolution failed")?;
        if !self.config.dry_run {
            let row = StoredRestaurant::create(restaurant, slug.clone());
            self.store.insert(&row).await.context("insert failed")?;
        }
        Ok(Outcome::Created { slug })
    }
}

/// Find the first free slug among `proposed`, `proposed-2`, `proposed-3`, ...
///
/// Check-then-use: a concurrent writer can claim the returned slug before it
/// is inserted, in which case the insert fails on the store's unique constraint.
pub async fn resolve_unique_slug<S: RestaurantStore + ?Sized>(store: &S, proposed: &str) -> Result<String> {
    if !store.slug_exists(proposed).await? {
        return Ok(proposed.to_string());
    }

    let mut suffix = 2;
    loop {
        let candidate = slug::with_suffix(proposed, suffix);
        if !store.slug_exists(&candidate).await? {
            debug!("Slug {proposed} taken, using {candidate}");
            return Ok(candidate);
        }
        suffix += 1;
    }
}
