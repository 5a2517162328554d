//! RestaurantStore trait definition.

use anyhow::Result;
use restaurant_types::{RestaurantDetails, StoredRestaurant};

/// Persistence operations used by the seeder.
///
/// Every method is a single blocking round-trip from the caller's point of
/// view; the seeder awaits each one before issuing the next. Implementations
/// must enforce place id and slug uniqueness on insert.
///
/// ```ignore
/// pub async fn seed<S: RestaurantStore>(store: &S, records: &[InputRecord]) -> Result<SeedSummary> {
///     // statically dispatched after monomorphization
///     let existing = store.find_by_place_id(&restaurant.place_id).await?;
/// }
/// ```
#[async_trait::async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Point lookup by external stable identifier.
    async fn find_by_place_id(&self, place_id: &str) -> Result<Option<StoredRestaurant>>;

    /// Whether any persisted restaurant currently holds `slug`.
    async fn slug_exists(&self, slug: &str) -> Result<bool>;

    /// Rewrite the externally supplied fields of the restaurant with
    /// `place_id`. Slug, id and system-managed fields are left untouched.
    ///
    /// Fails if no such restaurant exists.
    async fn update_details(&self, place_id: &str, details: &RestaurantDetails) -> Result<()>;

    /// Insert a new restaurant.
    async fn insert(&self, restaurant: &StoredRestaurant) -> Result<()>;

    /// Total number of persisted restaurants.
    async fn count(&self) -> Result<u64>;
}
