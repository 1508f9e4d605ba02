//! # vp-auth
//!
//! The Veriport session/authentication core.
//!
//! Provides the credential directory seam (`CredentialStore` +
//! `DemoDirectory`), durable session persistence (`SessionStore`, one
//! fail-open JSON record), and the `SessionManager` state machine that
//! owns the current identity and serializes login/logout.

pub mod directory;
pub mod error;
pub mod manager;
pub mod session_store;

pub use directory::{CredentialStore, DemoDirectory};
pub use error::AuthError;
pub use manager::{SessionManager, SessionState};
pub use session_store::SessionStore;
