//! Authentication session lifecycle.
//!
//! The session starts in [`AuthStatus::Loading`] and resolves to either
//! `Authenticated` or `Unauthenticated` during startup rehydration. Loading
//! is transient: it is never observable once [`Session::initialize`] has run.

use lumina_core::Identity;

use crate::store::{self, StoreAdapter, StoreError, keys};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// Startup rehydration has not resolved yet.
    #[default]
    Loading,
    /// A user is signed in; [`Session::identity`] is present.
    Authenticated,
    /// No user is signed in.
    Unauthenticated,
}

/// The current sign-in identity and its lifecycle status.
///
/// The two steady states are `Authenticated` and `Unauthenticated`; the
/// session cycles between them indefinitely via [`Session::sign_in`] and
/// [`Session::sign_out`]. Transitions persist write-through, so a reload
/// (a fresh `Session` over the same store) resolves to the same state.
#[derive(Debug, Default)]
pub struct Session {
    status: AuthStatus,
    identity: Option<Identity>,
}

impl Session {
    /// Create a session in the `Loading` state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: AuthStatus::Loading,
            identity: None,
        }
    }

    /// Resolve the session from the store.
    ///
    /// A stored identity that parses yields `Authenticated`; anything else
    /// (absent key, storage failure, malformed data) yields
    /// `Unauthenticated`. Startup must never fail here, so storage errors
    /// are logged and folded into the default state.
    pub fn initialize<S: StoreAdapter>(&mut self, store: &S) {
        let identity = match store::read_json::<S, Identity>(store, keys::USER) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored identity");
                None
            }
        };

        match identity {
            Some(identity) => {
                tracing::debug!(user = %identity.id, "session restored");
                self.status = AuthStatus::Authenticated;
                self.identity = Some(identity);
            }
            None => {
                self.status = AuthStatus::Unauthenticated;
                self.identity = None;
            }
        }
    }

    /// Sign in with an identity issued by the auth collaborator.
    ///
    /// The identity is persisted before the transition is considered
    /// complete. No shape validation happens here; issuing valid identities
    /// is the collaborator's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the identity cannot be persisted; the
    /// session state is left unchanged in that case.
    pub fn sign_in<S: StoreAdapter>(
        &mut self,
        identity: Identity,
        store: &mut S,
    ) -> Result<(), StoreError> {
        store::write_json(store, keys::USER, &identity)?;

        tracing::info!(user = %identity.id, "signed in");
        self.status = AuthStatus::Authenticated;
        self.identity = Some(identity);
        Ok(())
    }

    /// Sign out, clearing the persisted identity.
    ///
    /// Idempotent: signing out while already unauthenticated leaves the
    /// same resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the stored identity cannot be removed.
    pub fn sign_out<S: StoreAdapter>(&mut self, store: &mut S) -> Result<(), StoreError> {
        store.remove(keys::USER)?;

        if self.identity.take().is_some() {
            tracing::info!("signed out");
        }
        self.status = AuthStatus::Unauthenticated;
        Ok(())
    }

    /// Current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AuthStatus {
        self.status
    }

    /// The signed-in identity, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Whether a user is currently signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.status, AuthStatus::Authenticated)
    }
}
