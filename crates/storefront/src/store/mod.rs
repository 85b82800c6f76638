//! Persistent key/value store scoped to a local profile.
//!
//! The storage analog of a browser profile: values survive restarts, have
//! no expiry, and are only ever touched from the single logical thread of
//! the application. Values are opaque serialized blobs; callers pick the
//! wire format (JSON throughout this crate).

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Well-known storage keys.
pub mod keys {
    /// Key for the serialized identity of the signed-in user.
    pub const USER: &str = "user";

    /// Key for the serialized cart line sequence.
    pub const CART: &str = "cart";

    /// Key for the auth stand-in's account registry.
    pub const ACCOUNTS: &str = "accounts";

    /// Key for the order stand-in's order log.
    pub const ORDERS: &str = "orders";
}

/// Errors that can occur in a store adapter.
///
/// A missing key is not an error - reads return `Ok(None)` and removes
/// succeed. Errors are reserved for the storage medium itself failing.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage I/O failed.
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The key is not usable with this adapter.
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),

    /// A value could not be serialized for storage.
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        /// Key being written.
        key: String,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Durable key/value storage.
///
/// Absence is a represented result, never a failure. Writes are synchronous:
/// when `write` returns, the value is durable as far as the medium allows.
pub trait StoreAdapter {
    /// Read the raw value for `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only if the storage medium fails; a missing
    /// key is `Ok(None)`.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the raw value for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be stored.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value for `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage medium fails.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Read and deserialize the JSON value under `key`.
///
/// Malformed stored data is treated as absent (logged at `warn`), so a
/// corrupt value can never break startup - callers fall back to their
/// default state.
///
/// # Errors
///
/// Returns [`StoreError`] only if the storage medium fails.
pub fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    S: StoreAdapter + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.read(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding malformed stored value");
            Ok(None)
        }
    }
}

/// Serialize `value` as JSON and write it under `key`.
///
/// # Errors
///
/// Returns [`StoreError`] if serialization or the storage medium fails.
pub fn write_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: StoreAdapter + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_owned(),
        source,
    })?;
    store.write(key, &raw)
}
