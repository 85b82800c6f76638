//! File-backed store adapter.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{StoreAdapter, StoreError};

/// Store adapter keeping one JSON file per key under a profile directory.
///
/// Writes land in a temp file first and are renamed into place, so a value
/// on disk is always a complete former write, never a torn one.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a file store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The directory this store keeps its files in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve `key` to its file path.
    ///
    /// Keys must be plain names; anything that could escape the store
    /// directory is rejected.
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_err(key: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        key: key.to_owned(),
        source,
    }
}

impl StoreAdapter for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err(key, e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value).map_err(|e| io_err(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| io_err(key, e))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(key, e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("profile")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_write_then_read() {
        let (_dir, mut store) = temp_store();
        store.write("cart", "[1,2]").unwrap();
        assert_eq!(store.read("cart").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let (_dir, store) = temp_store();
        assert!(store.read("missing").unwrap().is_none());
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let (_dir, mut store) = temp_store();
        store.write("user", "old").unwrap();
        store.write("user", "new").unwrap();
        assert_eq!(store.read("user").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, mut store) = temp_store();
        store.write("user", "x").unwrap();
        store.remove("user").unwrap();
        store.remove("user").unwrap();
        assert!(store.read("user").unwrap().is_none());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile");

        let mut store = FileStore::open(&path).unwrap();
        store.write("cart", "[]").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.read("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_rejects_path_escaping_keys() {
        let (_dir, store) = temp_store();
        assert!(matches!(
            store.read("../outside"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.read(""), Err(StoreError::InvalidKey(_))));
    }
}
