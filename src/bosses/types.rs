use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BossError {
    #[error("boss name cannot be empty")]
    EmptyName,
}

/// A boss on the progression checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BossRecord")]
pub struct Boss {
    pub name: String,
    #[serde(default)]
    pub defeated: bool,
}

/// Saved form of a [`Boss`], validated on the way in.
#[derive(Deserialize)]
struct BossRecord {
    name: String,
    #[serde(default)]
    defeated: bool,
}

impl TryFrom<BossRecord> for Boss {
    type Error = BossError;

    fn try_from(record: BossRecord) -> Result<Self, Self::Error> {
        Boss::with_status(record.name, record.defeated)
    }
}

impl Boss {
    pub fn new(name: impl Into<String>) -> Result<Self, BossError> {
        Self::with_status(name, false)
    }

    pub fn with_status(name: impl Into<String>, defeated: bool) -> Result<Self, BossError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BossError::EmptyName);
        }
        Ok(Self { name, defeated })
    }

    pub fn toggle(&mut self) {
        self.defeated = !self.defeated;
    }
}

/// Display state of a boss relative to the rest of the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossStatus {
    /// The first undefeated boss in roster order.
    Next,
    Defeated,
    Pending,
}

impl BossStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BossStatus::Next => "next",
            BossStatus::Defeated => "defeated",
            BossStatus::Pending => "pending",
        }
    }
}

/// Index of the next objective: the first boss that has not been defeated.
pub fn next_boss(bosses: &[Boss]) -> Option<usize> {
    bosses.iter().position(|boss| !boss.defeated)
}

/// Status of every boss, in roster order.
pub fn boss_statuses(bosses: &[Boss]) -> Vec<BossStatus> {
    let next = next_boss(bosses);
    bosses
        .iter()
        .enumerate()
        .map(|(i, boss)| {
            if Some(i) == next {
                BossStatus::Next
            } else if boss.defeated {
                BossStatus::Defeated
            } else {
                BossStatus::Pending
            }
        })
        .collect()
}
