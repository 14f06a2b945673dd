//! Master weapon collection plus its derived query view.

use super::query::{
    best_available, filter_weapons, retain_tagged, sort_weapons, AvailabilityFilter, QueryState,
    SortOrder,
};
use super::scoring::is_available;
use super::types::Weapon;
use crate::constants::{NO_AVAILABLE_WEAPONS, NO_WEAPONS_IN_SYSTEM, NO_WEAPONS_MATCH, NO_WEAPONS_STORED};

/// Owns the master weapon list and the view produced from it.
///
/// The view is never recomputed on its own: call [`WeaponCatalog::run_query`]
/// after changing the filter, the sort order or the defeated-name set.
#[derive(Debug, Clone, Default)]
pub struct WeaponCatalog {
    weapons: Vec<Weapon>,
    query: Vec<Weapon>,
    availability: AvailabilityFilter,
    sort: SortOrder,
    state: QueryState,
}

impl WeaponCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_weapons(weapons: Vec<Weapon>) -> Self {
        Self {
            weapons,
            ..Self::default()
        }
    }

    pub fn add(&mut self, weapon: Weapon) -> bool {
        self.weapons.push(weapon);
        true
    }

    pub fn find(&self, index: usize) -> Option<&Weapon> {
        self.weapons.get(index)
    }

    pub fn find_mut(&mut self, index: usize) -> Option<&mut Weapon> {
        self.weapons.get_mut(index)
    }

    pub fn delete(&mut self, index: usize) -> Option<Weapon> {
        if index < self.weapons.len() {
            Some(self.weapons.remove(index))
        } else {
            None
        }
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn count(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn count_available<S: AsRef<str>>(&self, defeated_names: &[S]) -> usize {
        self.weapons
            .iter()
            .filter(|w| is_available(w, defeated_names))
            .count()
    }

    pub fn best_available_name<S: AsRef<str>>(&self, defeated_names: &[S]) -> &str {
        if self.weapons.is_empty() {
            return NO_WEAPONS_IN_SYSTEM;
        }
        best_available(&self.weapons, defeated_names)
            .map(|w| w.name.as_str())
            .unwrap_or(NO_AVAILABLE_WEAPONS)
    }

    pub fn availability(&self) -> AvailabilityFilter {
        self.availability
    }

    pub fn set_availability(&mut self, filter: AvailabilityFilter) {
        self.availability = filter;
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort = order;
    }

    /// Rebuilds the query view: filter stage, then sort stage.
    pub fn run_query<S: AsRef<str>>(&mut self, defeated_names: &[S]) {
        let mut view = filter_weapons(&self.weapons, self.availability, defeated_names);
        sort_weapons(&mut view, self.sort);
        self.query = view;
        self.state = if self.weapons.is_empty() {
            QueryState::Empty
        } else if self.availability == AvailabilityFilter::All {
            QueryState::Unfiltered
        } else {
            QueryState::Filtered
        };
    }

    /// Narrows the current view to weapons tagged `tag`.
    ///
    /// Only ever removes entries; run the query again to widen the view.
    pub fn filter_by_tag(&mut self, tag: &str) {
        retain_tagged(&mut self.query, tag);
        self.state = QueryState::TagNarrowed {
            tag: tag.to_string(),
        };
    }

    pub fn query_view(&self) -> &[Weapon] {
        &self.query
    }

    pub fn query_state(&self) -> &QueryState {
        &self.state
    }

    /// 1-indexed listing of the query view, or a sentinel when there is
    /// nothing to show.
    pub fn render_query_results(&self) -> String {
        if self.weapons.is_empty() {
            NO_WEAPONS_STORED.to_string()
        } else if self.query.is_empty() {
            NO_WEAPONS_MATCH.to_string()
        } else {
            self.query
                .iter()
                .enumerate()
                .map(|(i, w)| format!("{}: {}", i + 1, w))
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    }

    /// Drops every weapon and the view built from them.
    pub fn reset(&mut self) {
        self.weapons.clear();
        self.query.clear();
        self.state = QueryState::Empty;
    }
}
