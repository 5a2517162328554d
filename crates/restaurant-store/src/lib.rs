//! Restaurant store trait abstraction.
//!
//! The seeder only needs five round-trips against its persistence service:
//! lookup by place id, lookup by slug, update by place id, insert, and count.
//! [`RestaurantStore`] captures exactly those so the seeding loop is written
//! once and runs against PostgreSQL in production and [`MemoryStore`] in tests.

mod memory;
mod traits;

pub use memory::{MemoryStore, MemoryStoreError};
pub use traits::RestaurantStore;
