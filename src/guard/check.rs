//! Mount-time session validation and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per `ProtectedRoute` mount. Every failure is fail-closed: the
//! local session is cleared and the visitor is treated as signed out. Errors
//! are returned as values and never propagate past the guard.

#[cfg(test)]
#[path = "check_test.rs"]
mod check_test;

use super::access::RoleConfigError;
use crate::net::api::{ApiError, AuthBackend};
use crate::net::types::ProfileStatus;
use crate::session::{KeyValueStore, Session, SessionRepository};

/// Why the guard denied access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    #[error("no session token")]
    Unauthenticated,
    #[error("account is {0}")]
    SessionInvalidated(ProfileStatus),
    #[error("profile fetch failed: {0}")]
    ProfileFetchFailed(#[source] ApiError),
    #[error("route role configuration invalid: {0}")]
    RoleConfiguration(#[from] RoleConfigError),
    #[error("role {role} may not access this route")]
    RoleMismatch { role: String },
    #[error("logout failed: {0}")]
    LogoutFailed(#[source] ApiError),
}

impl GuardError {
    /// Whether the denial comes from route configuration rather than the visitor.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::RoleConfiguration(_))
    }
}

/// Guard state for one mount of a protected route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Checking,
    Authorized(Session),
    Unauthorized(GuardError),
}

impl GuardState {
    /// Fold a check result into the terminal state.
    #[must_use]
    pub fn from_check(result: Result<Session, GuardError>) -> Self {
        match result {
            Ok(session) => Self::Authorized(session),
            Err(err) => Self::Unauthorized(err),
        }
    }
}

/// Validate the stored session against the backend profile.
///
/// No token means no network call. A revoked account or any fetch failure
/// clears the stored session.
///
/// # Errors
///
/// Returns `Unauthenticated`, `SessionInvalidated`, or `ProfileFetchFailed`.
pub async fn check_session<S, B>(repo: &SessionRepository<S>, backend: &B) -> Result<Session, GuardError>
where
    S: KeyValueStore,
    B: AuthBackend,
{
    let Some(session) = repo.get() else {
        log::debug!("guard: no session token");
        return Err(GuardError::Unauthenticated);
    };

    match backend.fetch_profile(&session.token).await {
        Ok(profile) if profile.status.revokes_session() => {
            log::warn!("guard: account status {}; clearing session", profile.status);
            repo.clear();
            Err(GuardError::SessionInvalidated(profile.status))
        }
        Ok(_) => Ok(session),
        Err(err) => {
            log::warn!("guard: profile fetch failed: {err}; clearing session");
            repo.clear();
            Err(GuardError::ProfileFetchFailed(err))
        }
    }
}

/// Best-effort logout: notify the backend, then always clear the session.
///
/// # Errors
///
/// Returns `LogoutFailed` when the backend call failed. The session is cleared
/// regardless, so callers should still redirect to sign-in.
pub async fn sign_out<S, B>(repo: &SessionRepository<S>, backend: &B) -> Result<(), GuardError>
where
    S: KeyValueStore,
    B: AuthBackend,
{
    let result = match repo.get() {
        Some(session) => backend.logout(&session.token).await.map_err(GuardError::LogoutFailed),
        None => Ok(()),
    };
    repo.clear();
    if let Err(err) = &result {
        log::error!("sign-out: {err}");
    }
    result
}
