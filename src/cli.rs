//! Non-interactive command parsing.

/// A command given as the first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Version,
    Help,
    Status,
    Bosses,
    Weapons,
    Reset,
}

impl Command {
    /// Returns `None` for anything unrecognised.
    pub fn parse(arg: &str) -> Option<Self> {
        match arg {
            "--version" | "-v" => Some(Command::Version),
            "--help" | "-h" => Some(Command::Help),
            "status" => Some(Command::Status),
            "bosses" => Some(Command::Bosses),
            "weapons" => Some(Command::Weapons),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    /// Whether the command reads or writes the data directory.
    pub fn uses_data_dir(&self) -> bool {
        !matches!(self, Command::Version | Command::Help)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("-v"), Some(Command::Version));
        assert_eq!(Command::parse("--help"), Some(Command::Help));
        assert_eq!(Command::parse("status"), Some(Command::Status));
        assert_eq!(Command::parse("reset"), Some(Command::Reset));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert_eq!(Command::parse("stauts"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("STATUS"), None);
    }

    #[test]
    fn test_only_data_commands_touch_the_data_dir() {
        assert!(!Command::Version.uses_data_dir());
        assert!(!Command::Help.uses_data_dir());
        assert!(Command::Status.uses_data_dir());
        assert!(Command::Bosses.uses_data_dir());
        assert!(Command::Weapons.uses_data_dir());
        assert!(Command::Reset.uses_data_dir());
    }
}
