//! Configuration management

use crate::error::{JournalError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Entry dates, e.g. "18 October 2026"
pub const DEFAULT_DATE_FORMAT: &str = "%-d %B %Y";

/// Comment timestamps, e.g. "18/10/2026, 09:30:00"
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// What to do when a storage slot holds malformed JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Refuse to open; leave the stored value alone
    #[default]
    Fail,
    /// Back up the bad value and start over with defaults
    Reset,
}

impl FromStr for CorruptPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(CorruptPolicy::Fail),
            "reset" => Ok(CorruptPolicy::Reset),
            _ => Err(format!(
                "Invalid corrupt-data policy: '{}'. Valid policies: fail, reset",
                s
            )),
        }
    }
}

impl fmt::Display for CorruptPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptPolicy::Fail => write!(f, "fail"),
            CorruptPolicy::Reset => write!(f, "reset"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default)]
    pub on_corrupt: CorruptPolicy,
    pub created: DateTime<Utc>,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            date_format: default_date_format(),
            timestamp_format: default_timestamp_format(),
            on_corrupt: CorruptPolicy::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .fjour/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".fjour").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JournalError::NotJournalDirectory(path.to_path_buf())
            } else {
                JournalError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| JournalError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.check_formats()?;
        Ok(config)
    }

    /// Save config to .fjour/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let fjour_dir = path.join(".fjour");
        let config_path = fjour_dir.join("config.toml");

        if !fjour_dir.exists() {
            fs::create_dir(&fjour_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Reject strftime patterns chrono cannot render
    pub fn check_formats(&self) -> Result<()> {
        check_format("date_format", &self.date_format)?;
        check_format("timestamp_format", &self.timestamp_format)
    }
}

fn check_format(key: &str, pattern: &str) -> Result<()> {
    use chrono::format::{Item, StrftimeItems};

    if pattern.trim().is_empty() {
        return Err(JournalError::Config(format!("{} must not be empty", key)));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(JournalError::Config(format!(
            "Invalid {}: '{}' is not a valid strftime pattern",
            key, pattern
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.date_format, "%-d %B %Y");
        assert_eq!(config.on_corrupt, CorruptPolicy::Fail);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.on_corrupt = CorruptPolicy::Reset;

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".fjour").exists());
        assert!(temp.path().join(".fjour/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            JournalError::NotJournalDirectory(_) => {}
            other => panic!("Expected NotJournalDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".fjour")).unwrap();
        fs::write(
            temp.path().join(".fjour/config.toml"),
            "created = \"2026-10-18T09:30:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(loaded.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(loaded.on_corrupt, CorruptPolicy::Fail);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let mut config = Config::new();
        config.date_format = "%Q".to_string();
        assert!(config.check_formats().is_err());

        config.date_format = String::new();
        assert!(config.check_formats().is_err());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(CorruptPolicy::from_str("RESET"), Ok(CorruptPolicy::Reset));
        assert_eq!(CorruptPolicy::from_str("fail"), Ok(CorruptPolicy::Fail));
        assert!(CorruptPolicy::from_str("ignore").is_err());
        assert_eq!(CorruptPolicy::Reset.to_string(), "reset");
    }
}
