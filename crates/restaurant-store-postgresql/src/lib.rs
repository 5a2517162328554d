//! PostgreSQL restaurant store.
//!
//! Implements [`restaurant_store::RestaurantStore`] on top of `tokio-postgres`.
//! The table itself is owned by the application's migrations; [`sql`] only
//! builds the statements this crate issues plus a DDL fixture for tests.

pub mod args;
mod error;
pub mod sql;
mod store;

pub use args::PostgreSQLStoreArgs;
pub use error::PostgreSQLStoreError;
pub use store::PostgreSQLStore;
