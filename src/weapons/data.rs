//! Default weapon arsenal.

use std::num::NonZeroU32;

use super::types::Weapon;

struct WeaponDef {
    name: &'static str,
    damage: u32,
    critical_chance: u32,
    use_time: NonZeroU32,
    tags: &'static [&'static str],
    requirements: &'static [&'static str],
}

const fn ticks(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(t) => t,
        None => panic!("use time must be non-zero"),
    }
}

const DEFAULT_WEAPONS: [WeaponDef; 12] = [
    WeaponDef {
        name: "Night's Edge",
        damage: 40,
        critical_chance: 4,
        use_time: ticks(25),
        tags: &["melee", "broadsword"],
        requirements: &["Eater of Worlds", "Skeletron"],
    },
    WeaponDef {
        name: "Valor",
        damage: 28,
        critical_chance: 4,
        use_time: ticks(25),
        tags: &["melee", "yo-yo", "dungeon", "underground"],
        requirements: &["Skeletron"],
    },
    WeaponDef {
        name: "Storm Spear",
        damage: 14,
        critical_chance: 4,
        use_time: ticks(28),
        tags: &["melee", "spear", "desert", "underground"],
        requirements: &[],
    },
    WeaponDef {
        name: "Ice Boomerang",
        damage: 21,
        critical_chance: 6,
        use_time: ticks(20),
        tags: &["melee", "boomerang", "ice", "underground"],
        requirements: &[],
    },
    WeaponDef {
        name: "Terragrim",
        damage: 17,
        critical_chance: 4,
        use_time: ticks(25),
        tags: &["melee", "other", "forest", "surface"],
        requirements: &[],
    },
    WeaponDef {
        name: "Bee Keeper",
        damage: 30,
        critical_chance: 4,
        use_time: ticks(20),
        tags: &["melee", "broadsword", "jungle", "underground"],
        requirements: &["Queen Bee"],
    },
    WeaponDef {
        name: "Copper Shortsword",
        damage: 5,
        critical_chance: 4,
        use_time: ticks(13),
        tags: &["melee", "shortsword", "surface"],
        requirements: &[],
    },
    WeaponDef {
        name: "Bloody Machete",
        damage: 20,
        critical_chance: 4,
        use_time: ticks(15),
        tags: &["melee", "boomerang", "halloween"],
        requirements: &[],
    },
    WeaponDef {
        name: "The Meatball",
        damage: 34,
        critical_chance: 4,
        use_time: ticks(45),
        tags: &["melee", "flail", "crimson"],
        requirements: &["Brain of Cthulhu"],
    },
    WeaponDef {
        name: "Lucy the Axe",
        damage: 27,
        critical_chance: 14,
        use_time: ticks(15),
        tags: &["melee", "axe", "ice", "surface"],
        requirements: &["Brain of Cthulhu"],
    },
    WeaponDef {
        name: "Breaker Blade",
        damage: 70,
        critical_chance: 4,
        use_time: ticks(30),
        tags: &["melee", "broadsword", "underworld"],
        requirements: &["Wall of Flesh"],
    },
    WeaponDef {
        name: "Starfury",
        damage: 25,
        critical_chance: 4,
        use_time: ticks(20),
        tags: &["melee", "broadsword", "sky"],
        requirements: &[],
    },
];

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Returns the arsenal a fresh save starts with.
pub fn default_weapons() -> Vec<Weapon> {
    DEFAULT_WEAPONS
        .iter()
        .map(|def| Weapon {
            name: def.name.to_string(),
            damage: def.damage,
            critical_chance: def.critical_chance,
            use_time: def.use_time,
            tags: to_owned(def.tags),
            requirements: to_owned(def.requirements),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bosses::default_bosses;

    #[test]
    fn test_default_arsenal_size() {
        assert_eq!(default_weapons().len(), 12);
    }

    #[test]
    fn test_requirements_name_default_bosses() {
        let boss_names: Vec<String> = default_bosses().into_iter().map(|b| b.name).collect();
        for weapon in default_weapons() {
            for req in &weapon.requirements {
                assert!(boss_names.contains(req), "{} requires unknown boss {}", weapon.name, req);
            }
        }
    }

    #[test]
    fn test_default_dps_values() {
        let dps: Vec<(String, u32)> = default_weapons()
            .into_iter()
            .map(|w| {
                let d = w.dps();
                (w.name, d)
            })
            .collect();
        let lookup = |name: &str| dps.iter().find(|(n, _)| n == name).map(|(_, d)| *d);

        assert_eq!(lookup("Night's Edge"), Some(99));
        assert_eq!(lookup("Copper Shortsword"), Some(24));
        assert_eq!(lookup("Bloody Machete"), Some(83));
        assert_eq!(lookup("Lucy the Axe"), Some(123));
        assert_eq!(lookup("Breaker Blade"), Some(145));
    }
}
