//! Default boss roster, in progression order.

use super::types::Boss;

const DEFAULT_BOSS_NAMES: [&str; 8] = [
    "King Slime",
    "Eye of Cthulhu",
    "Eater of Worlds",
    "Brain of Cthulhu",
    "Queen Bee",
    "Skeletron",
    "Deerclops",
    "Wall of Flesh",
];

/// Returns the roster a fresh save starts with. Nothing is defeated.
pub fn default_bosses() -> Vec<Boss> {
    DEFAULT_BOSS_NAMES
        .iter()
        .map(|name| Boss {
            name: (*name).to_string(),
            defeated: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bosses::next_boss;

    #[test]
    fn test_default_roster() {
        let bosses = default_bosses();
        assert_eq!(bosses.len(), 8);
        assert!(bosses.iter().all(|b| !b.defeated));
        assert_eq!(next_boss(&bosses), Some(0));
        assert_eq!(bosses[0].name, "King Slime");
        assert_eq!(bosses[7].name, "Wall of Flesh");
    }
}
