//! Restaurant record types.
//!
//! Input files carry untrusted JSON objects. They are parsed exactly once into
//! a validated [`Restaurant`] via [`parse_record`]; anything malformed becomes a
//! [`ValidationError`] that the seeder reports against that single record.
//!
//! [`RestaurantDetails`] holds every externally supplied field, which is also
//! the full set of columns an update is allowed to rewrite. The counters and
//! flags in [`SystemFields`] only ever receive their defaults at creation.

mod error;
mod record;
mod restaurant;
pub mod slug;

pub use error::ValidationError;
pub use record::{parse_record, record_label};
pub use restaurant::{Restaurant, RestaurantDetails, StoredRestaurant, SystemFields};
