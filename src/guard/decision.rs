//! Render/redirect decision for a protected route.

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;

use super::access::RouteAccess;
use super::check::{GuardError, GuardState};
use crate::config::RoutePaths;
use crate::session::Role;

pub const FORBIDDEN_NOTICE: &str = "Access forbidden: your account cannot open that page.";

const NO_ROLE: &str = "<none>";

/// What the guard should do for the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session check still in flight.
    Loading,
    /// Show the protected children.
    Render,
    /// Navigate away, optionally telling the visitor why.
    Redirect { to: String, notice: Option<String>, reason: GuardError },
    /// Role is not routable: log out, then send to sign-in.
    ForceSignOut { reason: GuardError },
}

/// Home page for a role, if it has one.
#[must_use]
pub fn home_for<'a>(role: Option<&Role>, paths: &'a RoutePaths) -> Option<&'a str> {
    match role? {
        Role::Admin => Some(paths.admin_home.as_str()),
        Role::User => Some(paths.user_home.as_str()),
        Role::Other(_) => None,
    }
}

#[must_use]
pub fn decide(state: &GuardState, access: &RouteAccess, paths: &RoutePaths) -> GuardOutcome {
    let session = match state {
        GuardState::Checking => return GuardOutcome::Loading,
        GuardState::Unauthorized(reason) => {
            return GuardOutcome::Redirect { to: paths.sign_in.clone(), notice: None, reason: reason.clone() };
        }
        GuardState::Authorized(session) => session,
    };

    let allowed = match access.allowed() {
        Ok(allowed) => allowed,
        Err(err) => {
            return GuardOutcome::Redirect {
                to: paths.sign_in.clone(),
                notice: None,
                reason: GuardError::RoleConfiguration(err.clone()),
            };
        }
    };

    let role = session.role.as_ref();
    if allowed.permits(role) {
        return GuardOutcome::Render;
    }

    let reason = GuardError::RoleMismatch { role: role.map_or_else(|| NO_ROLE.to_owned(), |r| r.as_str().to_owned()) };
    match home_for(role, paths) {
        Some(home) => GuardOutcome::Redirect { to: home.to_owned(), notice: Some(FORBIDDEN_NOTICE.to_owned()), reason },
        None => GuardOutcome::ForceSignOut { reason },
    }
}
