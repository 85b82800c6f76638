//! In-memory store adapter.

use std::collections::HashMap;

use super::{StoreAdapter, StoreError};

/// Store adapter backed by a plain map.
///
/// Nothing survives the process; used for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreAdapter for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_remove() {
        let mut store = MemoryStore::new();
        assert!(store.read("user").unwrap().is_none());

        store.write("user", "{}").unwrap();
        assert_eq!(store.read("user").unwrap().as_deref(), Some("{}"));

        store.remove("user").unwrap();
        assert!(store.read("user").unwrap().is_none());
    }
}
