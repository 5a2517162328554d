//! Restaurant seeding library.
//!
//! Loads a JSON array of restaurant records and upserts each one into a
//! [`RestaurantStore`], matching on the external place id. New restaurants get
//! a slug that is unique across the store (`joes-diner`, `joes-diner-2`, ...);
//! existing ones have their supplied fields rewritten while store-managed
//! counters are preserved.
//!
//! ```ignore
//! let records = load_input(&path).await?;
//! let store = PostgreSQLStore::connect(&database_url, "restaurants").await?;
//! let result = Seeder::new(&store, SeedConfig::default()).run(&records).await;
//! store.close().await;
//! result?.log();
//! ```

pub mod config;
mod error;
pub mod input;
pub mod seeder;
mod summary;

pub use config::SeedArgs;
pub use error::{InputError, RecordError};
pub use input::{load_input, InputRecord};
pub use seeder::{resolve_unique_slug, Outcome, SeedConfig, Seeder};
pub use summary::SeedSummary;

pub use restaurant_store::{MemoryStore, RestaurantStore};
pub use restaurant_store_postgresql::{PostgreSQLStore, PostgreSQLStoreArgs};
