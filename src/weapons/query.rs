//! Filter and sort stages that turn the master weapon list into a view.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::scoring::{calculate_dps, has_tag, is_available};
use super::types::Weapon;

/// Which weapons feed the query view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AvailabilityFilter {
    All,
    #[default]
    Available,
    Unavailable,
}

impl AvailabilityFilter {
    pub const ALL: [AvailabilityFilter; 3] = [
        AvailabilityFilter::All,
        AvailabilityFilter::Available,
        AvailabilityFilter::Unavailable,
    ];

    /// Decodes a 1-based menu choice. Unknown choices show everything.
    pub fn from_option(option: u32) -> Self {
        match option {
            2 => AvailabilityFilter::Available,
            3 => AvailabilityFilter::Unavailable,
            _ => AvailabilityFilter::All,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AvailabilityFilter::All => "All Weapons",
            AvailabilityFilter::Available => "Available Weapons",
            AvailabilityFilter::Unavailable => "Unavailable Weapons",
        }
    }

    pub fn keeps<S: AsRef<str>>(&self, weapon: &Weapon, defeated_names: &[S]) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Available => is_available(weapon, defeated_names),
            AvailabilityFilter::Unavailable => !is_available(weapon, defeated_names),
        }
    }
}

/// DPS ordering of the query view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    HighestDps,
    LowestDps,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::HighestDps, SortOrder::LowestDps];

    /// Decodes a 1-based menu choice. Unknown choices sort highest first.
    pub fn from_option(option: u32) -> Self {
        match option {
            2 => SortOrder::LowestDps,
            _ => SortOrder::HighestDps,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortOrder::HighestDps => "By Highest DPS",
            SortOrder::LowestDps => "By Lowest DPS",
        }
    }
}

/// Where the query view currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState {
    /// No weapons in the master collection.
    #[default]
    Empty,
    Unfiltered,
    Filtered,
    TagNarrowed { tag: String },
}

/// Filter stage. Always returns owned copies, even for `All`.
pub fn filter_weapons<S: AsRef<str>>(
    weapons: &[Weapon],
    filter: AvailabilityFilter,
    defeated_names: &[S],
) -> Vec<Weapon> {
    weapons
        .iter()
        .filter(|w| filter.keeps(w, defeated_names))
        .cloned()
        .collect()
}

/// Sort stage. Stable: equal DPS keeps its incoming order.
///
/// Both orders keep ties in incoming order, so reversing a `HighestDps` view
/// matches the `LowestDps` view only when every DPS value is distinct.
pub fn sort_weapons(weapons: &mut [Weapon], order: SortOrder) {
    match order {
        SortOrder::HighestDps => weapons.sort_by_key(|w| Reverse(calculate_dps(w))),
        SortOrder::LowestDps => weapons.sort_by_key(calculate_dps),
    }
}

/// Narrows `view` in place to weapons carrying `tag`.
pub fn retain_tagged(view: &mut Vec<Weapon>, tag: &str) {
    view.retain(|w| has_tag(w, tag));
}

/// The available weapon with the highest DPS. Ties go to the earliest entry.
pub fn best_available<'a, S: AsRef<str>>(
    weapons: &'a [Weapon],
    defeated_names: &[S],
) -> Option<&'a Weapon> {
    weapons
        .iter()
        .filter(|w| is_available(w, defeated_names))
        .fold(None, |best: Option<&Weapon>, w| match best {
            Some(b) if calculate_dps(b) >= calculate_dps(w) => Some(b),
            _ => Some(w),
        })
}
