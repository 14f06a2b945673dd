//! Ordered boss roster with defeat tracking.

use super::types::{boss_statuses, next_boss, Boss, BossStatus};
use crate::constants::{ALL_BOSSES_DEFEATED, NO_BOSSES_STORED};

/// Owns the master boss collection, in roster order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BossLedger {
    bosses: Vec<Boss>,
}

impl BossLedger {
    pub fn new() -> Self {
        Self { bosses: Vec::new() }
    }

    pub fn from_bosses(bosses: Vec<Boss>) -> Self {
        Self { bosses }
    }

    /// Appends a boss. Duplicate names are allowed.
    pub fn add(&mut self, boss: Boss) -> bool {
        self.bosses.push(boss);
        true
    }

    pub fn find(&self, index: usize) -> Option<&Boss> {
        self.bosses.get(index)
    }

    pub fn find_mut(&mut self, index: usize) -> Option<&mut Boss> {
        self.bosses.get_mut(index)
    }

    pub fn delete(&mut self, index: usize) -> Option<Boss> {
        if index < self.bosses.len() {
            Some(self.bosses.remove(index))
        } else {
            None
        }
    }

    /// Flips the defeated flag of the boss at `index`, returning the new value.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let boss = self.bosses.get_mut(index)?;
        boss.toggle();
        Some(boss.defeated)
    }

    pub fn bosses(&self) -> &[Boss] {
        &self.bosses
    }

    /// Index of the next objective, derived from the current defeat flags.
    pub fn next_index(&self) -> Option<usize> {
        next_boss(&self.bosses)
    }

    pub fn next_boss_name(&self) -> &str {
        self.next_index()
            .map(|i| self.bosses[i].name.as_str())
            .unwrap_or(ALL_BOSSES_DEFEATED)
    }

    pub fn statuses(&self) -> Vec<BossStatus> {
        boss_statuses(&self.bosses)
    }

    /// Names of defeated bosses in roster order.
    pub fn defeated_names(&self) -> Vec<String> {
        self.bosses
            .iter()
            .filter(|boss| boss.defeated)
            .map(|boss| boss.name.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.bosses.len()
    }

    pub fn defeated_count(&self) -> usize {
        self.bosses.iter().filter(|boss| boss.defeated).count()
    }

    pub fn is_empty(&self) -> bool {
        self.bosses.is_empty()
    }

    /// 1-indexed plain text listing with each boss's status.
    pub fn list_rendered(&self) -> String {
        if self.bosses.is_empty() {
            return NO_BOSSES_STORED.to_string();
        }
        self.bosses
            .iter()
            .zip(self.statuses())
            .enumerate()
            .map(|(i, (boss, status))| format!("{}: {} [{}]", i + 1, boss.name, status.label()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn reset(&mut self) {
        self.bosses.clear();
    }
}
