//! Authentication service.
//!
//! Local stand-in for the upstream auth collaborator: a password-based
//! account registry kept in the profile store. On success it issues an
//! [`Identity`], which is all the session layer ever sees of it.

mod error;

pub use error::AuthError;

use std::collections::BTreeMap;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lumina_core::{Email, Identity, Role, UserId};

use crate::store::{self, StoreAdapter, keys};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// A registered account: the identity it resolves to plus the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredAccount {
    identity: Identity,
    password_hash: String,
}

/// Account registry, keyed by email. A corrupted stored registry is treated
/// as empty, like every other rehydration point.
type Accounts = BTreeMap<String, StoredAccount>;

/// Authentication service.
///
/// Handles registration and login over the profile store's account
/// registry. Stateless apart from the store handed into each call.
#[derive(Debug, Default)]
pub struct AuthService;

impl AuthService {
    /// Register a new account and issue its identity.
    ///
    /// New accounts always get the `customer` role; admins are provisioned
    /// out of band.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] if the email format is invalid,
    /// [`AuthError::WeakPassword`] if the password doesn't meet
    /// requirements, and [`AuthError::AccountAlreadyExists`] if the email
    /// is already registered.
    pub fn register<S: StoreAdapter>(
        &self,
        store: &mut S,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let mut accounts = load_accounts(store)?;
        if accounts.contains_key(email.as_str()) {
            return Err(AuthError::AccountAlreadyExists);
        }

        let identity = Identity {
            id: UserId::new(Uuid::new_v4().to_string()),
            name: name.to_owned(),
            email: email.clone(),
            role: Role::Customer,
        };

        let password_hash = hash_password(password)?;
        accounts.insert(
            email.into_inner(),
            StoredAccount {
                identity: identity.clone(),
                password_hash,
            },
        );
        store::write_json(store, keys::ACCOUNTS, &accounts)?;

        tracing::info!(user = %identity.id, "account registered");
        Ok(identity)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if the email is unknown or
    /// the password is wrong.
    pub fn login<S: StoreAdapter>(
        &self,
        store: &S,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let email = Email::parse(email)?;

        let accounts = load_accounts(store)?;
        let account = accounts
            .get(email.as_str())
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &account.password_hash)?;

        Ok(account.identity.clone())
    }
}

/// Load the account registry, defaulting to empty.
fn load_accounts<S: StoreAdapter>(store: &S) -> Result<Accounts, AuthError> {
    Ok(store::read_json(store, keys::ACCOUNTS)?.unwrap_or_default())
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_register_then_login() {
        let mut store = MemoryStore::new();
        let auth = AuthService;

        let registered = auth
            .register(&mut store, "Ada", "ada@example.com", "correct-horse")
            .unwrap();
        assert_eq!(registered.role, Role::Customer);

        let logged_in = auth.login(&store, "ada@example.com", "correct-horse").unwrap();
        assert_eq!(logged_in, registered);
    }

    #[test]
    fn test_login_wrong_password() {
        let mut store = MemoryStore::new();
        let auth = AuthService;
        auth.register(&mut store, "Ada", "ada@example.com", "correct-horse")
            .unwrap();

        let result = auth.login(&store, "ada@example.com", "wrong-horse");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_login_unknown_email() {
        let store = MemoryStore::new();
        let result = AuthService.login(&store, "nobody@example.com", "whatever1");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_register_duplicate_email() {
        let mut store = MemoryStore::new();
        let auth = AuthService;
        auth.register(&mut store, "Ada", "ada@example.com", "correct-horse")
            .unwrap();

        let result = auth.register(&mut store, "Ada II", "ada@example.com", "other-pass1");
        assert!(matches!(result, Err(AuthError::AccountAlreadyExists)));
    }

    #[test]
    fn test_register_rejects_weak_password() {
        let mut store = MemoryStore::new();
        let result = AuthService.register(&mut store, "Ada", "ada@example.com", "short");
        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let mut store = MemoryStore::new();
        let result = AuthService.register(&mut store, "Ada", "not-an-email", "long-enough");
        assert!(matches!(result, Err(AuthError::InvalidEmail(_))));
    }

    #[test]
    fn test_corrupted_registry_treated_as_empty() {
        let mut store = MemoryStore::new();
        store.write(keys::ACCOUNTS, "]]junk[[").unwrap();

        // registration proceeds against an empty registry instead of failing
        let result = AuthService.register(&mut store, "Ada", "ada@example.com", "correct-horse");
        assert!(result.is_ok());
    }
}
