//! Validated and persisted restaurant entities.

use serde_json::Value;
use uuid::Uuid;

/// Fields supplied by the input file. An update rewrites exactly these.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantDetails {
    pub name: String,
    pub cover_image_url: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub cuisine_types: Vec<String>,
    /// 0 (free) to 4 (very expensive).
    pub price_level: Option<i16>,
    /// Hours of operation, stored opaquely.
    pub hours: Option<Value>,
}

/// A validated input record.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    /// External stable identifier, the match key for update-vs-create.
    pub place_id: String,
    /// Proposed slug. The persisted slug may carry a numeric suffix.
    pub slug: String,
    pub details: RestaurantDetails,
}

/// Store-managed counters and flags, set only when an entity is created.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SystemFields {
    pub post_count: i32,
    pub average_rating: f64,
    pub meals_donated: i32,
    pub is_claimed: bool,
}

/// A restaurant as it exists in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRestaurant {
    pub id: Uuid,
    pub place_id: String,
    pub slug: String,
    pub details: RestaurantDetails,
    pub system: SystemFields,
}

impl StoredRestaurant {
    /// Build the entity to insert for a newly seen record.
    pub fn create(restaurant: &Restaurant, slug: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            place_id: restaurant.place_id.clone(),
            slug: slug.into(),
            details: restaurant.details.clone(),
            system: SystemFields::default(),
        }
    }
}
