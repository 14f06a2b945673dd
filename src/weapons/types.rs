use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use thiserror::Error;

use super::scoring::calculate_dps;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeaponError {
    #[error("weapon name cannot be empty")]
    EmptyName,
    #[error("use time must be greater than zero")]
    ZeroUseTime,
}

/// A weapon whose availability depends on which bosses are down.
///
/// `use_time` is measured in ticks at 60 ticks per second. It can never be
/// zero, which keeps DPS defined for every weapon in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WeaponRecord")]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
    /// Percentage points.
    pub critical_chance: u32,
    pub use_time: NonZeroU32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Boss names that must all be defeated before the weapon is available.
    #[serde(default)]
    pub requirements: Vec<String>,
}

/// Saved form of a [`Weapon`], validated through [`Weapon::new`].
#[derive(Deserialize)]
struct WeaponRecord {
    name: String,
    damage: u32,
    critical_chance: u32,
    use_time: u32,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    requirements: Vec<String>,
}

impl TryFrom<WeaponRecord> for Weapon {
    type Error = WeaponError;

    fn try_from(record: WeaponRecord) -> Result<Self, Self::Error> {
        Weapon::new(
            record.name,
            record.damage,
            record.critical_chance,
            record.use_time,
            record.tags,
            record.requirements,
        )
    }
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        damage: u32,
        critical_chance: u32,
        use_time: u32,
        tags: Vec<String>,
        requirements: Vec<String>,
    ) -> Result<Self, WeaponError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(WeaponError::EmptyName);
        }
        let use_time = NonZeroU32::new(use_time).ok_or(WeaponError::ZeroUseTime)?;
        Ok(Self {
            name,
            damage,
            critical_chance,
            use_time,
            tags,
            requirements,
        })
    }

    pub fn dps(&self) -> u32 {
        calculate_dps(self)
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {} DPS", self.name, self.dps())?;
        writeln!(
            f,
            "Damage: {}, Use Time: {}, Critical Strike Chance: {}%",
            self.damage, self.use_time, self.critical_chance
        )?;
        write!(f, "Tags: [{}]", self.tags.join(", "))
    }
}
