//! File system backed journal directory

use crate::error::{JournalError, Result};
use crate::infrastructure::storage::{validate_key, KeyValueStorage};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const FJOUR_DIR: &str = ".fjour";
const STORAGE_DIR: &str = "storage";

/// Abstract repository for journal directory operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .fjour/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .fjour/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .fjour directory exists
    fn is_initialized(&self) -> bool;

    /// Create .fjour directory structure
    fn initialize(&self) -> Result<()>;
}

/// Journal directory with one JSON file per storage key
/// under `.fjour/storage/`
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    pub root: PathBuf,
}

impl FileSystemStorage {
    /// Create a storage handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStorage { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks FJOUR_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check FJOUR_ROOT environment variable first
        if let Ok(root_path) = std::env::var("FJOUR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_fjour_dir(&path) {
                return Ok(FileSystemStorage::new(path));
            } else {
                return Err(JournalError::Config(format!(
                    "FJOUR_ROOT is set to '{}' but no .fjour directory found. \
                    Run 'fjour init' in that directory or unset FJOUR_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_fjour_dir(&current) {
                return Ok(FileSystemStorage::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                // Reached filesystem root without finding .fjour
                None => return Err(JournalError::NotJournalDirectory(start.to_path_buf())),
            }
        }
    }

    /// Check if a path contains a .fjour directory
    fn has_fjour_dir(path: &Path) -> bool {
        path.join(FJOUR_DIR).is_dir()
    }

    fn storage_dir(&self) -> PathBuf {
        self.root.join(FJOUR_DIR).join(STORAGE_DIR)
    }

    /// Path of the file backing a storage key
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.storage_dir().join(format!("{}.json", key)))
    }
}

impl JournalRepository for FileSystemStorage {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_fjour_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let fjour_dir = self.root.join(FJOUR_DIR);

        if fjour_dir.exists() {
            return Err(JournalError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.storage_dir())?;
        Ok(())
    }
}

impl KeyValueStorage for FileSystemStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JournalError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = path.with_file_name(format!("{}.json.tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        debug!(key, bytes = value.len(), "wrote storage slot");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(JournalError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_storage_dir() {
        let temp = TempDir::new().unwrap();
        let storage = FileSystemStorage::new(temp.path().to_path_buf());

        assert!(!storage.is_initialized());
        storage.initialize().unwrap();
        assert!(storage.is_initialized());
        assert!(temp.path().join(".fjour/storage").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let storage = FileSystemStorage::new(temp.path().to_path_buf());

        storage.initialize().unwrap();
        assert!(storage.initialize().is_err());
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        FileSystemStorage::new(temp.path().to_path_buf())
            .initialize()
            .unwrap();

        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemStorage::discover_from(&nested).unwrap();
        assert_eq!(found.root(), temp.path());
    }

    #[test]
    fn test_discover_without_journal_fails() {
        let temp = TempDir::new().unwrap();
        match FileSystemStorage::discover_from(temp.path()) {
            Err(JournalError::NotJournalDirectory(_)) => {}
            other => panic!("Expected NotJournalDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_slots_round_trip_through_files() {
        let temp = TempDir::new().unwrap();
        let storage = FileSystemStorage::new(temp.path().to_path_buf());
        storage.initialize().unwrap();

        assert_eq!(storage.get_item("journalEntries").unwrap(), None);

        storage.set_item("journalEntries", "[]").unwrap();
        storage.set_item("journalEntries", "[{}]").unwrap();
        assert_eq!(
            storage.get_item("journalEntries").unwrap().as_deref(),
            Some("[{}]")
        );
        assert!(temp.path().join(".fjour/storage/journalEntries.json").exists());

        // No temp files left behind
        let leftovers = fs::read_dir(temp.path().join(".fjour/storage"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp-"))
            .count();
        assert_eq!(leftovers, 0);

        storage.remove_item("journalEntries").unwrap();
        storage.remove_item("journalEntries").unwrap();
        assert_eq!(storage.get_item("journalEntries").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let storage = FileSystemStorage::new(temp.path().to_path_buf());
        assert!(matches!(
            storage.set_item("../escape", "x"),
            Err(JournalError::InvalidStorageKey(_))
        ));
    }
}
