//! Composing context: owns the boss ledger, the weapon catalog and their stores.
//!
//! The defeated-name set is never cached here. Every query derives it from the
//! ledger and hands it to the catalog by value.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::bosses::{default_bosses, Boss, BossLedger};
use crate::constants::{BOSSES_FILE, SETTINGS_FILE, WEAPONS_FILE};
use crate::utils::persistence::{JsonStore, Store};
use crate::utils::settings::Settings;
use crate::weapons::{default_weapons, AvailabilityFilter, SortOrder, Weapon, WeaponCatalog};

/// Numbers shown in the main menu header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub bosses_defeated: usize,
    pub bosses_total: usize,
    pub next_boss: String,
    pub weapons_available: usize,
    pub weapons_total: usize,
    pub best_weapon: String,
}

pub struct App {
    pub ledger: BossLedger,
    pub catalog: WeaponCatalog,
    boss_store: JsonStore<Vec<Boss>>,
    weapon_store: JsonStore<Vec<Weapon>>,
    settings_path: PathBuf,
}

/// Loads a collection, seeding defaults when there is nothing usable on disk.
fn load_or_seed<T, S, F>(store: &S, what: &str, defaults: F) -> Vec<T>
where
    S: Store<Vec<T>>,
    F: Fn() -> Vec<T>,
{
    if !store.exists() {
        let seeded = defaults();
        info!(count = seeded.len(), "No saved {what}, seeding defaults");
        if let Err(e) = store.save(&seeded) {
            warn!(error = %e, "Failed to save default {what}");
        }
        return seeded;
    }

    match store.load() {
        Ok(records) => {
            info!(count = records.len(), "Loaded {what}");
            records
        }
        Err(e) => {
            warn!(error = %e, "Could not read saved {what}, using defaults");
            defaults()
        }
    }
}

impl App {
    /// Opens the save files in `data_dir`, falling back to defaults for
    /// anything missing or unreadable.
    pub fn open(data_dir: &Path) -> Self {
        let boss_store = JsonStore::new(data_dir.join(BOSSES_FILE));
        let weapon_store = JsonStore::new(data_dir.join(WEAPONS_FILE));
        let settings_path = data_dir.join(SETTINGS_FILE);

        let ledger = BossLedger::from_bosses(load_or_seed(&boss_store, "bosses", default_bosses));
        let mut catalog =
            WeaponCatalog::from_weapons(load_or_seed(&weapon_store, "weapons", default_weapons));

        let settings = Settings::load(&settings_path);
        catalog.set_availability(settings.availability);
        catalog.set_sort_order(settings.sort);

        let mut app = Self {
            ledger,
            catalog,
            boss_store,
            weapon_store,
            settings_path,
        };
        app.refresh_query();
        app
    }

    pub fn defeated_names(&self) -> Vec<String> {
        self.ledger.defeated_names()
    }

    /// Re-runs the weapon query against the current defeat flags.
    pub fn refresh_query(&mut self) {
        let defeated = self.defeated_names();
        self.catalog.run_query(&defeated);
        debug!(
            shown = self.catalog.query_view().len(),
            defeated = defeated.len(),
            "Weapon query refreshed"
        );
    }

    /// Flips a boss, refreshes the weapon view and saves the roster.
    ///
    /// Returns the new defeated flag, or `None` if `index` is out of range.
    /// The view follows the flip even when the save fails.
    pub fn toggle_boss(&mut self, index: usize) -> io::Result<Option<bool>> {
        let Some(defeated) = self.ledger.toggle(index) else {
            return Ok(None);
        };
        if let Some(boss) = self.ledger.find(index) {
            info!(boss = %boss.name, defeated, "Boss toggled");
        }
        self.refresh_query();
        self.save_bosses()?;
        Ok(Some(defeated))
    }

    /// Applies new search options, remembers them and refreshes the view.
    pub fn set_search_options(
        &mut self,
        availability: AvailabilityFilter,
        sort: SortOrder,
    ) -> io::Result<()> {
        self.catalog.set_availability(availability);
        self.catalog.set_sort_order(sort);
        self.refresh_query();

        let settings = Settings { availability, sort };
        settings.save(&self.settings_path)
    }

    /// Starts from a fresh query, then narrows it to `tag`.
    pub fn search_by_tag(&mut self, tag: &str) {
        self.refresh_query();
        self.catalog.filter_by_tag(tag.trim());
        debug!(tag, shown = self.catalog.query_view().len(), "Tag search");
    }

    /// Wipes both collections and reseeds the default roster and arsenal.
    ///
    /// Both files are written even if the first write fails; the first
    /// error is returned.
    pub fn reset_to_defaults(&mut self) -> io::Result<()> {
        self.ledger.reset();
        self.catalog.reset();
        for boss in default_bosses() {
            self.ledger.add(boss);
        }
        for weapon in default_weapons() {
            self.catalog.add(weapon);
        }
        info!(
            bosses = self.ledger.count(),
            weapons = self.catalog.count(),
            "Data reset to defaults"
        );
        self.refresh_query();

        let bosses = self.save_bosses();
        let weapons = self.save_weapons();
        bosses.and(weapons)
    }

    pub fn summary(&self) -> Summary {
        let defeated = self.defeated_names();
        Summary {
            bosses_defeated: self.ledger.defeated_count(),
            bosses_total: self.ledger.count(),
            next_boss: self.ledger.next_boss_name().to_string(),
            weapons_available: self.catalog.count_available(&defeated),
            weapons_total: self.catalog.count(),
            best_weapon: self.catalog.best_available_name(&defeated).to_string(),
        }
    }

    pub fn save_bosses(&self) -> io::Result<()> {
        self.boss_store.save(&self.ledger.bosses().to_vec())
    }

    pub fn save_weapons(&self) -> io::Result<()> {
        self.weapon_store.save(&self.catalog.weapons().to_vec())
    }
}
