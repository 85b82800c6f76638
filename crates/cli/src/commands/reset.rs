//! Profile reset command.

use thiserror::Error;

use lumina_storefront::config::{ConfigError, StorefrontConfig};
use lumina_storefront::store::{FileStore, StoreAdapter, StoreError, keys};

/// Which parts of the profile store to clear.
#[derive(Debug, Clone, Copy)]
pub struct Targets {
    pub cart: bool,
    pub user: bool,
    pub orders: bool,
    pub accounts: bool,
}

impl Targets {
    const fn is_empty(&self) -> bool {
        !(self.cart || self.user || self.orders || self.accounts)
    }
}

/// Errors that can occur while resetting a profile.
#[derive(Debug, Error)]
pub enum ResetError {
    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Profile store could not be written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// No target selected.
    #[error("nothing to reset; pass --cart, --user, --orders, or --all")]
    NothingSelected,
}

/// Clear the selected keys from the active profile's store.
///
/// # Errors
///
/// Returns [`ResetError`] if no target is selected or the store fails.
#[allow(clippy::print_stdout)]
pub fn run(targets: &Targets) -> Result<(), ResetError> {
    if targets.is_empty() {
        return Err(ResetError::NothingSelected);
    }

    let config = StorefrontConfig::from_env()?;
    let mut store = FileStore::open(config.store_dir())?;

    let selected = [
        (targets.cart, keys::CART),
        (targets.user, keys::USER),
        (targets.orders, keys::ORDERS),
        (targets.accounts, keys::ACCOUNTS),
    ];

    for (_, key) in selected.iter().filter(|(on, _)| *on) {
        store.remove(key)?;
        println!("cleared '{key}'");
    }

    Ok(())
}
