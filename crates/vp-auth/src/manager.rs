//! The session state machine.
//!
//! ```text
//! uninitialized → authenticated   (persisted record restored)
//!               → unauthenticated (no record, or record discarded)
//! unauthenticated → authenticated (login verified)
//! authenticated → authenticated   (re-login replaces the identity)
//! authenticated → unauthenticated (logout)
//! ```
//!
//! The manager exclusively owns the in-memory session. Login and logout
//! serialize through an internal async mutex: a second operation issued
//! while one is suspended waits its turn, so two racing logins can never
//! tear the final identity. Reads never take that mutex.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use vp_core::Identity;

use crate::directory::CredentialStore;
use crate::error::AuthError;
use crate::session_store::SessionStore;

/// Current authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Transient, at process start: the persisted record has not been
    /// consulted yet. Consumers should present nothing rather than flash
    /// a signed-out view.
    Uninitialized,
    /// No identity held.
    Unauthenticated,
    /// Exactly one identity held. Single-session model.
    Authenticated(Identity),
}

impl SessionState {
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Uninitialized | Self::Unauthenticated => None,
        }
    }
}

/// Owns the current session and the operations that change it.
pub struct SessionManager<C> {
    directory: C,
    store: SessionStore,
    state: Mutex<SessionState>,
    loading: AtomicBool,
    // Serializes restore/login/logout. Held across the awaits inside
    // login, which the state mutex must never be.
    ops: tokio::sync::Mutex<()>,
}

impl<C: CredentialStore> SessionManager<C> {
    /// Construct in the `Uninitialized` state with the loading flag raised.
    /// Call [`Self::restore`] (or use [`Self::open`]) before routing.
    #[must_use]
    pub fn new(directory: C, store: SessionStore) -> Self {
        Self {
            directory,
            store,
            state: Mutex::new(SessionState::Uninitialized),
            loading: AtomicBool::new(true),
            ops: tokio::sync::Mutex::new(()),
        }
    }

    /// Construct and immediately resolve the persisted session.
    pub async fn open(directory: C, store: SessionStore) -> Self {
        let manager = Self::new(directory, store);
        manager.restore().await;
        manager
    }

    /// Resolve `Uninitialized` from the persisted record, once.
    ///
    /// Fail-open by way of [`SessionStore::load`]: a corrupted record is
    /// discarded and the session comes up `Unauthenticated`. Calling this
    /// again after the state has resolved is a no-op.
    pub async fn restore(&self) {
        let _op = self.ops.lock().await;
        {
            let mut state = self.state_guard();
            if *state == SessionState::Uninitialized {
                *state = match self.store.load() {
                    Some(identity) => SessionState::Authenticated(identity),
                    None => SessionState::Unauthenticated,
                };
            }
        }
        self.loading.store(false, Ordering::SeqCst);
    }

    /// Attempt to authenticate.
    ///
    /// Returns `Ok(false)` for bad credentials — unknown email and wrong
    /// secret are indistinguishable to the caller, and the state is left
    /// unchanged. On success the held identity is replaced wholesale
    /// (a login while already authenticated is a re-authentication) and
    /// the record is persisted.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` if the verified identity
    /// cannot be persisted. The in-memory session is still updated.
    pub async fn login(&self, email: &str, secret: &str) -> Result<bool, AuthError> {
        let _op = self.ops.lock().await;
        self.loading.store(true, Ordering::SeqCst);

        if !self.directory.verify(email, secret).await {
            self.loading.store(false, Ordering::SeqCst);
            return Ok(false);
        }

        let Some(identity) = self.directory.find_by_email(email).await else {
            // Verified but no longer resolvable; report the same uniform
            // failure as bad credentials.
            self.loading.store(false, Ordering::SeqCst);
            return Ok(false);
        };

        *self.state_guard() = SessionState::Authenticated(identity.clone());
        let persisted = self.store.save(&identity);
        self.loading.store(false, Ordering::SeqCst);
        persisted?;
        Ok(true)
    }

    /// Clear the in-memory identity and the persisted record. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` if an existing persisted
    /// record cannot be removed. The in-memory session is cleared first
    /// regardless.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let _op = self.ops.lock().await;
        *self.state_guard() = SessionState::Unauthenticated;
        self.store.clear()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state_guard().clone()
    }

    /// The current identity, cloned — callers cannot mutate the session.
    #[must_use]
    pub fn current_identity(&self) -> Option<Identity> {
        self.state_guard().identity().cloned()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state_guard(), SessionState::Authenticated(_))
    }

    /// True while the startup resolution or a login is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    fn state_guard(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
