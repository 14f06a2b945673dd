//! Tagbook - boss checklist and weapon availability tracker.
//!
//! This module exposes the tracking engine for testing and external use.

pub mod app;
pub mod bosses;
pub mod cli;
pub mod constants;
pub mod input;
pub mod ui;
pub mod utils;
pub mod weapons;

pub use app::{App, Summary};
pub use bosses::{Boss, BossLedger, BossStatus};
pub use weapons::{AvailabilityFilter, SortOrder, Weapon, WeaponCatalog};
