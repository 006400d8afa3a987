//! Initialize journal use case

use crate::application::Journal;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemStorage, JournalRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new journal at the specified path and seed it.
///
/// Returns the number of entries the new journal starts with.
pub fn init(path: &Path) -> Result<usize> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repository = FileSystemStorage::new(path.to_path_buf());
    repository.initialize()?;
    repository.save_config(&Config::new())?;

    // Opening the stores writes the seed entries
    let journal = Journal::open_repository(repository)?;
    info!(path = %path.display(), "initialized journal");

    Ok(journal.entries().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_seeds_entries_only() {
        let temp = TempDir::new().unwrap();
        let count = init(temp.path()).unwrap();

        assert_eq!(count, 3);
        assert!(temp.path().join(".fjour/config.toml").exists());
        assert!(temp.path().join(".fjour/storage/journalEntries.json").exists());
        assert!(!temp.path().join(".fjour/storage/comments.json").exists());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("voyage");
        init(&target).unwrap();
        assert!(target.join(".fjour").is_dir());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
