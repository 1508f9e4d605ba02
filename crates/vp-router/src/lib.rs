//! # vp-router
//!
//! Maps the session manager's state to the surface the portal presents.
//!
//! The decision is an exhaustive match: every role lands on exactly one
//! dashboard (recruiters share the employer experience), unresolved
//! sessions present nothing, and signed-out sessions land on the sign-in
//! surface. An out-of-set role is unrepresentable here — an unknown role
//! string in persisted data is already discarded by the session store's
//! fail-open load and resolves to `SignIn`.

use std::fmt;

use vp_auth::SessionState;
use vp_core::Dashboard;

/// The surface to present for a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Session still resolving; present nothing (or a neutral loading
    /// state) rather than flash the sign-in surface.
    Pending,
    /// Public landing / sign-in surface.
    SignIn,
    /// The authenticated identity's dashboard.
    Dashboard(Dashboard),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::SignIn => f.write_str("sign_in"),
            Self::Dashboard(dashboard) => write!(f, "dashboard:{dashboard}"),
        }
    }
}

/// Decide the route for the current session state.
#[must_use]
pub fn resolve(state: &SessionState) -> Route {
    match state {
        SessionState::Uninitialized => Route::Pending,
        SessionState::Unauthenticated => Route::SignIn,
        SessionState::Authenticated(identity) => Route::Dashboard(identity.role.dashboard()),
    }
}
