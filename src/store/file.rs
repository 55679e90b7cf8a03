//! File-backed key-value store.
//!
//! One UTF-8 file per namespace under a data directory, written whole on
//! every set. The native stand-in for origin-scoped browser local storage.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::StorageError;

use super::KeyValueStore;

/// Key-value store persisting each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_reads_as_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("announcements").unwrap().is_none());
    }

    #[test]
    fn test_value_survives_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set("announcements", "[{\"id\":\"a-1\"}]").unwrap();
        }
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get("announcements").unwrap().as_deref(),
            Some("[{\"id\":\"a-1\"}]")
        );
    }
}
