//! User preferences stored next to the save files.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use super::persistence::{load_json_or_default, save_json};
use crate::weapons::{AvailabilityFilter, SortOrder};

/// Search options the weapon view starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub availability: AvailabilityFilter,
    #[serde(default)]
    pub sort: SortOrder,
}

impl Settings {
    /// Missing or unreadable settings fall back to defaults.
    pub fn load(path: &Path) -> Self {
        load_json_or_default(path)
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        save_json(path, self)
    }
}
