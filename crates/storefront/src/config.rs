//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LUMINA_DATA_DIR` - Root directory for persisted state (default:
//!   the platform's local data directory, e.g. `~/.local/share/lumina`)
//! - `LUMINA_PROFILE` - Profile name under the data directory (default:
//!   `default`). Each profile has its own independent store, like separate
//!   browser profiles.

use std::path::PathBuf;

use thiserror::Error;

/// Default profile name.
const DEFAULT_PROFILE: &str = "default";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No data directory could be determined for this platform.
    #[error("no data directory available; set LUMINA_DATA_DIR")]
    NoDataDir,

    /// An environment variable has an unusable value.
    #[error("invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Root directory for persisted state.
    pub data_dir: PathBuf,
    /// Profile name; state lives under `data_dir/profile`.
    pub profile: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no data directory can be determined or the
    /// profile name is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = match get_optional_env("LUMINA_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_local_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join("lumina"),
        };

        let profile = get_env_or_default("LUMINA_PROFILE", DEFAULT_PROFILE);
        validate_profile(&profile)?;

        Ok(Self { data_dir, profile })
    }

    /// Directory holding this profile's store files.
    #[must_use]
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join(&self.profile)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a profile name is a plain directory name.
fn validate_profile(profile: &str) -> Result<(), ConfigError> {
    let valid = !profile.is_empty()
        && profile
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            "LUMINA_PROFILE".to_string(),
            format!("'{profile}' is not a plain name"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_profile_accepts_plain_names() {
        assert!(validate_profile("default").is_ok());
        assert!(validate_profile("work_2").is_ok());
        assert!(validate_profile("guest-profile").is_ok());
    }

    #[test]
    fn test_validate_profile_rejects_path_fragments() {
        assert!(validate_profile("").is_err());
        assert!(validate_profile("../escape").is_err());
        assert!(validate_profile("a/b").is_err());
    }

    #[test]
    fn test_store_dir_is_profile_scoped() {
        let config = StorefrontConfig {
            data_dir: PathBuf::from("/data/lumina"),
            profile: "guest".to_string(),
        };
        assert_eq!(config.store_dir(), PathBuf::from("/data/lumina/guest"));
    }
}
