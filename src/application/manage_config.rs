//! Config management use case

use crate::error::{JournalError, Result};
use crate::infrastructure::{Config, CorruptPolicy, FileSystemStorage, JournalRepository};
use std::str::FromStr;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemStorage,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemStorage) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "date_format" => Ok(config.date_format),
            "timestamp_format" => Ok(config.timestamp_format),
            "on_corrupt" => Ok(config.on_corrupt.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JournalError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: date_format, timestamp_format, \
                on_corrupt, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "date_format" => config.date_format = value.to_string(),
            "timestamp_format" => config.timestamp_format = value.to_string(),
            "on_corrupt" => {
                config.on_corrupt = CorruptPolicy::from_str(value).map_err(JournalError::Config)?;
            }
            "created" => {
                return Err(JournalError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JournalError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: date_format, timestamp_format, \
                    on_corrupt",
                    key
                )));
            }
        }

        config.check_formats()?;
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repository = FileSystemStorage::new(temp.path().to_path_buf());
        repository.initialize().unwrap();
        repository.save_config(&Config::new()).unwrap();
        ConfigService::new(repository)
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert_eq!(service.get("date_format").unwrap(), "%-d %B %Y");
        assert_eq!(service.get("on_corrupt").unwrap(), "fail");
    }

    #[test]
    fn test_set_policy() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        service.set("on_corrupt", "reset").unwrap();
        assert_eq!(service.get("on_corrupt").unwrap(), "reset");
        assert!(service.set("on_corrupt", "ignore").is_err());
    }

    #[test]
    fn test_set_invalid_format_not_saved() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("date_format", "%Q").is_err());
        assert_eq!(service.get("date_format").unwrap(), "%-d %B %Y");
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.get("created").is_ok());
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
        assert!(service.get("editor").is_err());
    }
}
