// Weapon timing
pub const TICKS_PER_SECOND: u64 = 60;

// Save system constants
pub const SAVE_FORMAT_VERSION: u32 = 1;
pub const DATA_DIR_NAME: &str = ".tagbook";
pub const DATA_DIR_ENV: &str = "TAGBOOK_HOME";
pub const BOSSES_FILE: &str = "bosses.json";
pub const WEAPONS_FILE: &str = "weapons.json";
pub const SETTINGS_FILE: &str = "settings.json";

// Logging
pub const LOG_FILE: &str = "tagbook.log";
pub const LOG_FILTER_ENV: &str = "TAGBOOK_LOG";
pub const DEFAULT_LOG_FILTER: &str = "tagbook=info";

// Presentation sentinels
pub const ALL_BOSSES_DEFEATED: &str = "All bosses defeated";
pub const NO_BOSSES_STORED: &str = "No bosses stored";
pub const NO_WEAPONS_STORED: &str = "No weapons stored";
pub const NO_WEAPONS_MATCH: &str = "No weapons match current settings";
pub const NO_WEAPONS_IN_SYSTEM: &str = "There are no weapons in the system";
pub const NO_AVAILABLE_WEAPONS: &str = "There are no available weapons";

// UI timing
pub const INPUT_POLL_MS: u64 = 50;
