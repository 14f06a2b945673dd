//! Weapon catalog: DPS ranking, boss-gated availability and the query view.

mod catalog;
mod data;
pub mod query;
mod scoring;
mod types;

pub use catalog::WeaponCatalog;
pub use data::default_weapons;
pub use query::{AvailabilityFilter, QueryState, SortOrder};
pub use scoring::{calculate_dps, has_tag, is_available};
pub use types::{Weapon, WeaponError};
