//! Boss checklist: roster, defeat flags and the next objective.

mod data;
mod ledger;
mod types;

pub use data::default_bosses;
pub use ledger::BossLedger;
pub use types::{boss_statuses, next_boss, Boss, BossError, BossStatus};
