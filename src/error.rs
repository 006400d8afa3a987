//! Error types for fjour

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fjour
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Not a fjour directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(i64),

    #[error("Stored data under '{key}' is not valid JSON: {source}")]
    CorruptStorage {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No ids left: largest id in use is {0}")]
    IdSpaceExhausted(i64),

    #[error("Invalid storage key: {0}")]
    InvalidStorageKey(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::NotJournalDirectory(_) => 2,
            JournalError::EntryNotFound(_) => 3,
            JournalError::CorruptStorage { .. } => 4,
            JournalError::Validation(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::NotJournalDirectory(path) => {
                format!(
                    "Not a fjour directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'fjour init' in this directory to create a new journal\n\
                    • Navigate to an existing fjour directory\n\
                    • Set FJOUR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JournalError::EntryNotFound(id) => {
                format!(
                    "Entry not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'fjour list' to see entry ids",
                    id
                )
            }
            JournalError::CorruptStorage { key, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Inspect .fjour/storage/{}.json and repair it by hand\n\
                    • Run 'fjour config on_corrupt reset' to back up the bad value \
                    and start over with defaults",
                    self, key
                )
            }
            JournalError::IdSpaceExhausted(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Inspect .fjour/storage for an entry or comment with an oversized id",
                    self
                )
            }
            JournalError::Config(msg) => {
                if msg.contains("Invalid corrupt-data policy") {
                    format!(
                        "{}\n\n\
                        Valid policies: fail, reset\n\
                        Example: fjour config on_corrupt reset",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;
