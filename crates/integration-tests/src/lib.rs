//! Integration tests for Lumina Market.
//!
//! These tests exercise the storefront state core through its public
//! shell surface only: shell operations in, snapshots and persisted
//! state out. Each test gets its own throwaway profile directory, and
//! "reload" means reopening a fresh shell over the same directory -
//! exactly what a storefront restart does.
//!
//! # Test Categories
//!
//! - `storefront_flow` - cart mutation, write-through, and checkout flows
//! - `session_lifecycle` - sign-in/sign-out across reloads and corruption
//!   recovery

use lumina_storefront::services::Catalog;
use lumina_storefront::state::App;
use lumina_storefront::store::FileStore;

/// A throwaway profile directory plus the means to boot shells over it.
pub struct TestProfile {
    dir: tempfile::TempDir,
}

impl TestProfile {
    /// Create a fresh, empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create profile dir"),
        }
    }

    /// Boot an initialized shell over this profile, as startup would.
    #[must_use]
    pub fn boot(&self) -> App<FileStore> {
        let store = FileStore::open(self.dir.path()).expect("failed to open profile store");
        let mut app = App::new(store, Catalog::demo());
        app.initialize();
        app
    }

    /// Raw store access, for seeding and inspecting persisted state.
    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::open(self.dir.path()).expect("failed to open profile store")
    }
}

impl Default for TestProfile {
    fn default() -> Self {
        Self::new()
    }
}
