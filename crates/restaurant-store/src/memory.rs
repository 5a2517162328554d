//! In-memory RestaurantStore.
//!
//! Mirrors the constraints of the PostgreSQL table (unique place id, unique
//! slug) and supports injecting write failures for specific place ids.

use crate::traits::RestaurantStore;
use anyhow::Result;
use restaurant_types::{RestaurantDetails, StoredRestaurant};
use std::collections::HashSet;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

/// Errors raised by [`MemoryStore`].
#[derive(Error, Debug)]
pub enum MemoryStoreError {
    /// Insert would duplicate a unique column.
    #[error("duplicate {column} '{value}'")]
    UniqueViolation { column: &'static str, value: String },

    /// Update targeted a place id that is not stored.
    #[error("no restaurant with place id '{0}'")]
    NotFound(String),

    /// Write failure injected with [`MemoryStore::fail_writes_for`].
    #[error("injected write failure for place id '{0}'")]
    Injected(String),

    /// Count failure injected with [`MemoryStore::fail_count`].
    #[error("injected count failure")]
    InjectedCount,

    /// Read failure injected with [`MemoryStore::fail_reads_for`].
    #[error("injected read failure for place id '{0}'")]
    InjectedRead(String),
}

#[derive(Default)]
struct Inner {
    rows: Vec<StoredRestaurant>,
    failing: HashSet<String>,
    failing_reads: HashSet<String>,
    failing_count: bool,
    mutations: u64,
}

/// Restaurant store kept in process memory, in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `rows`. Pre-population does not
    /// count as a mutation.
    pub fn with_rows(rows: impl IntoIterator<Item = StoredRestaurant>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                rows: rows.into_iter().collect(),
                ..Inner::default()
            }),
        }
    }

    /// Make every update or insert for `place_id` fail.
    pub async fn fail_writes_for(&self, place_id: impl Into<String>) {
        self.inner.lock().await.failing.insert(place_id.into());
    }

    /// Make every lookup of `place_id` fail.
    pub async fn fail_reads_for(&self, place_id: impl Into<String>) {
        self.inner.lock().await.failing_reads.insert(place_id.into());
    }

    /// Make [`RestaurantStore::count`] fail.
    pub async fn fail_count(&self) {
        self.inner.lock().await.failing_count = true;
    }

    /// Fetch a stored restaurant by place id.
    pub async fn get(&self, place_id: &str) -> Option<StoredRestaurant> {
        let inner = self.inner.lock().await;
        inner.rows.iter().find(|r| r.place_id == place_id).cloned()
    }

    /// Snapshot of every stored restaurant.
    pub async fn all(&self) -> Vec<StoredRestaurant> {
        self.inner.lock().await.rows.clone()
    }

    /// Number of successful updates and inserts.
    pub async fn mutation_count(&self) -> u64 {
        self.inner.lock().await.mutations
    }
}

#[async_trait::async_trait]
impl RestaurantStore for MemoryStore {
    async fn find_by_place_id(&self, place_id: &str) -> Result<Option<StoredRestaurant>> {
        let inner = self.inner.lock().await;
        if inner.failing_reads.contains(place_id) {
            return Err(MemoryStoreError::InjectedRead(place_id.to_string()).into());
        }
        Ok(inner.rows.iter().find(|r| r.place_id == place_id).cloned())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.iter().any(|r| r.slug == slug))
    }

    async fn update_details(&self, place_id: &str, details: &RestaurantDetails) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if inner.failing.contains(place_id) {
            return Err(MemoryStoreError::Injected(place_id.to_string()).into());
        }

        let row = inner
            .rows
            .iter_mut()
            .find(|r| r.place_id == place_id)
            .ok_or_else(|| MemoryStoreError::NotFound(place_id.to_string()))?;
        row.details = details.clone();
        inner.mutations += 1;

        debug!("Updated restaurant {place_id} in memory");
        Ok(())
    }

    async fn insert(&self, restaurant: &StoredRestaurant) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if inner.failing.contains(&restaurant.place_id) {
            return Err(MemoryStoreError::Injected(restaurant.place_id.clone()).into());
        }

        if inner.rows.iter().any(|r| r.place_id == restaurant.place_id) {
            return Err(MemoryStoreError::UniqueViolation {
                column: "place_id",
                value: restaurant.place_id.clone(),
            }
            .into());
        }
        if inner.rows.iter().any(|r| r.slug == restaurant.slug) {
            return Err(MemoryStoreError::UniqueViolation {
                column: "slug",
                value: restaurant.slug.clone(),
            }
            .into());
        }

        inner.rows.push(restaurant.clone());
        inner.mutations += 1;

        debug!(
            "Inserted restaurant {} ({}) in memory",
            restaurant.place_id, restaurant.slug
        );
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        let inner = self.inner.lock().await;
        if inner.failing_count {
            return Err(MemoryStoreError::InjectedCount.into());
        }
        Ok(inner.rows.len() as u64)
    }
}
