//! Unified error handling for the storefront state core.
//!
//! Provides a unified `AppError` over the component error types. Every
//! shell operation returns `Result<T, AppError>`; there are no fatal
//! errors inside the core itself - storage corruption and not-found
//! mutation targets are absorbed before they ever reach this type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::services::orders::OrderError;
use crate::store::StoreError;

/// Application-level error type for the storefront state core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persistent store operation failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Authentication collaborator reported a failure.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Order collaborator reported a failure.
    #[error("order error: {0}")]
    Order(#[from] OrderError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Operation requires a signed-in user.
    #[error("not signed in")]
    NotAuthenticated,
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotAuthenticated;
        assert_eq!(err.to_string(), "not signed in");

        let err = AppError::Order(OrderError::EmptyCart);
        assert_eq!(
            err.to_string(),
            "order error: cannot place an order for an empty cart"
        );
    }
}
