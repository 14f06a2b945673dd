//! Availability engine integration tests
//!
//! Drives the ledger and the catalog together the way the shell does:
//! toggle bosses, derive the defeated-name set, query the catalog.

use tagbook::bosses::{default_bosses, Boss, BossLedger, BossStatus};
use tagbook::constants::{ALL_BOSSES_DEFEATED, NO_AVAILABLE_WEAPONS, NO_WEAPONS_IN_SYSTEM};
use tagbook::weapons::{
    calculate_dps, default_weapons, is_available, AvailabilityFilter, SortOrder, Weapon,
    WeaponCatalog,
};

fn weapon(name: &str, damage: u32, crit: u32, use_time: u32, tags: &[&str], reqs: &[&str]) -> Weapon {
    Weapon::new(
        name,
        damage,
        crit,
        use_time,
        tags.iter().map(|t| t.to_string()).collect(),
        reqs.iter().map(|r| r.to_string()).collect(),
    )
    .unwrap()
}

fn default_ledger() -> BossLedger {
    BossLedger::from_bosses(default_bosses())
}

fn default_catalog() -> WeaponCatalog {
    WeaponCatalog::from_weapons(default_weapons())
}

fn view_names(catalog: &WeaponCatalog) -> Vec<String> {
    catalog.query_view().iter().map(|w| w.name.clone()).collect()
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_reference_dps() {
    assert_eq!(calculate_dps(&weapon("Night's Edge", 40, 4, 25, &[], &[])), 99);
}

#[test]
fn test_next_boss_skips_defeated_prefix() {
    let mut ledger = BossLedger::new();
    ledger.add(Boss::with_status("A", true).unwrap());
    ledger.add(Boss::new("B").unwrap());
    ledger.add(Boss::new("C").unwrap());

    assert_eq!(
        ledger.statuses(),
        vec![BossStatus::Defeated, BossStatus::Next, BossStatus::Pending]
    );
    assert_eq!(ledger.next_boss_name(), "B");
}

#[test]
fn test_unmet_requirement_and_no_available_sentinel() {
    let gated = weapon("Gated", 10, 0, 20, &[], &["B"]);
    let defeated = vec!["A".to_string()];
    assert!(!is_available(&gated, &defeated));

    let mut catalog = WeaponCatalog::new();
    catalog.add(gated);
    assert_eq!(catalog.best_available_name(&defeated), NO_AVAILABLE_WEAPONS);
    assert_eq!(WeaponCatalog::new().best_available_name(&defeated), NO_WEAPONS_IN_SYSTEM);
}

#[test]
fn test_tag_filter_never_reincludes_unavailable_weapons() {
    let mut catalog = WeaponCatalog::new();
    catalog.add(weapon("Locked Blade", 90, 0, 20, &["melee"], &["Skeletron"]));
    catalog.add(weapon("Free Blade", 10, 0, 20, &["melee"], &[]));
    catalog.add(weapon("Free Bow", 30, 0, 20, &["ranged"], &[]));

    catalog.set_availability(AvailabilityFilter::Available);
    catalog.run_query::<String>(&[]);
    catalog.filter_by_tag("melee");

    assert_eq!(view_names(&catalog), vec!["Free Blade"]);
}

// ============================================================================
// Ledger -> defeated names -> catalog
// ============================================================================

#[test]
fn test_full_progression_cycle() {
    let mut ledger = default_ledger();
    let mut catalog = default_catalog();

    catalog.run_query(&ledger.defeated_names());
    assert_eq!(catalog.query_view().len(), 6);
    assert_eq!(view_names(&catalog)[0], "Bloody Machete");

    // Eater of Worlds alone is not enough for Night's Edge
    ledger.toggle(2);
    catalog.run_query(&ledger.defeated_names());
    assert!(!view_names(&catalog).contains(&"Night's Edge".to_string()));

    // Skeletron completes it and unlocks Valor too
    ledger.toggle(5);
    catalog.run_query(&ledger.defeated_names());
    let names = view_names(&catalog);
    assert_eq!(names[0], "Night's Edge");
    assert!(names.contains(&"Valor".to_string()));
    assert_eq!(catalog.count_available(&ledger.defeated_names()), 8);

    // Un-defeating a boss locks its weapons again
    ledger.toggle(5);
    catalog.run_query(&ledger.defeated_names());
    assert!(!view_names(&catalog).contains(&"Valor".to_string()));
}

#[test]
fn test_everything_unlocked_when_roster_cleared() {
    let mut ledger = default_ledger();
    let catalog = default_catalog();
    for i in 0..ledger.count() {
        ledger.toggle(i);
    }

    assert_eq!(ledger.next_boss_name(), ALL_BOSSES_DEFEATED);
    assert!(ledger.statuses().iter().all(|s| *s == BossStatus::Defeated));

    let defeated = ledger.defeated_names();
    assert_eq!(catalog.count_available(&defeated), catalog.count());
    assert_eq!(catalog.best_available_name(&defeated), "Breaker Blade");
}

#[test]
fn test_query_view_does_not_track_ledger_changes_until_rerun() {
    let mut ledger = default_ledger();
    let mut catalog = default_catalog();

    catalog.run_query(&ledger.defeated_names());
    let before = view_names(&catalog);

    ledger.toggle(4); // Queen Bee
    assert_eq!(view_names(&catalog), before);

    catalog.run_query(&ledger.defeated_names());
    assert!(view_names(&catalog).contains(&"Bee Keeper".to_string()));
}

// ============================================================================
// Properties over the default arsenal
// ============================================================================

#[test]
fn test_available_and_unavailable_partition_the_catalog() {
    let mut ledger = default_ledger();
    let mut catalog = default_catalog();
    ledger.toggle(3);
    ledger.toggle(5);
    let defeated = ledger.defeated_names();

    catalog.set_availability(AvailabilityFilter::Available);
    catalog.run_query(&defeated);
    let available = catalog.query_view().len();

    catalog.set_availability(AvailabilityFilter::Unavailable);
    catalog.run_query(&defeated);
    let unavailable = catalog.query_view().len();

    assert_eq!(available + unavailable, catalog.count());
    assert_eq!(available, catalog.count_available(&defeated));
}

#[test]
fn test_highest_reversed_is_lowest_on_default_arsenal() {
    // Default arsenal has distinct DPS values, so the orders mirror exactly
    let mut catalog = default_catalog();
    catalog.set_availability(AvailabilityFilter::All);

    catalog.set_sort_order(SortOrder::HighestDps);
    catalog.run_query::<String>(&[]);
    let mut highest = view_names(&catalog);
    highest.reverse();

    catalog.set_sort_order(SortOrder::LowestDps);
    catalog.run_query::<String>(&[]);
    assert_eq!(highest, view_names(&catalog));
}

#[test]
fn test_highest_first_really_is_highest_first() {
    let mut catalog = default_catalog();
    catalog.set_availability(AvailabilityFilter::All);
    catalog.set_sort_order(SortOrder::HighestDps);
    catalog.run_query::<String>(&[]);

    let dps: Vec<u32> = catalog.query_view().iter().map(calculate_dps).collect();
    assert!(dps.windows(2).all(|pair| pair[0] >= pair[1]), "{dps:?}");
    assert_eq!(dps[0], 145);
}

#[test]
fn test_all_filter_does_not_alias_master_collection() {
    let mut catalog = default_catalog();
    catalog.set_availability(AvailabilityFilter::All);
    catalog.run_query::<String>(&[]);
    catalog.filter_by_tag("axe");

    assert_eq!(view_names(&catalog), vec!["Lucy the Axe"]);
    assert_eq!(catalog.count(), 12);
    assert_eq!(catalog.weapons(), default_weapons().as_slice());
}
