use serde_json::json;

use super::*;
use crate::guard::access::RoleConfigError;
use crate::net::api::ApiError;
use crate::net::types::ProfileStatus;
use crate::session::Session;

fn authorized(token: &str, role: Option<Role>) -> GuardState {
    GuardState::Authorized(Session { token: token.to_owned(), role, email: None })
}

fn paths() -> RoutePaths {
    RoutePaths::default()
}

// =============================================================
// Session state
// =============================================================

#[test]
fn checking_renders_loading() {
    assert_eq!(decide(&GuardState::Checking, &RouteAccess::default(), &paths()), GuardOutcome::Loading);
}

#[test]
fn unauthenticated_redirects_to_sign_in() {
    let state = GuardState::Unauthorized(GuardError::Unauthenticated);
    let outcome = decide(&state, &RouteAccess::only([Role::Admin]), &paths());
    assert_eq!(
        outcome,
        GuardOutcome::Redirect { to: "/sign-in".to_owned(), notice: None, reason: GuardError::Unauthenticated }
    );
}

#[test]
fn invalidated_and_failed_sessions_redirect_to_sign_in() {
    for reason in [
        GuardError::SessionInvalidated(ProfileStatus::Banned),
        GuardError::ProfileFetchFailed(ApiError::Status(503)),
    ] {
        let outcome = decide(&GuardState::Unauthorized(reason.clone()), &RouteAccess::default(), &paths());
        assert_eq!(outcome, GuardOutcome::Redirect { to: "/sign-in".to_owned(), notice: None, reason });
    }
}

// =============================================================
// Role checks
// =============================================================

#[test]
fn user_on_shared_route_renders() {
    let access = RouteAccess::only([Role::Admin, Role::User]);
    assert_eq!(decide(&authorized("abc", Some(Role::User)), &access, &paths()), GuardOutcome::Render);
}

#[test]
fn admin_on_admin_route_renders() {
    let access = RouteAccess::only([Role::Admin]);
    assert_eq!(decide(&authorized("xyz", Some(Role::Admin)), &access, &paths()), GuardOutcome::Render);
}

#[test]
fn unrestricted_route_renders_for_any_session() {
    let state = authorized("xyz", Some(Role::Other("auditor".to_owned())));
    assert_eq!(decide(&state, &RouteAccess::default(), &paths()), GuardOutcome::Render);
}

#[test]
fn admin_on_user_route_goes_to_admin_home() {
    let outcome = decide(&authorized("xyz", Some(Role::Admin)), &RouteAccess::only([Role::User]), &paths());
    assert_eq!(
        outcome,
        GuardOutcome::Redirect {
            to: "/admin/dashboard".to_owned(),
            notice: Some(FORBIDDEN_NOTICE.to_owned()),
            reason: GuardError::RoleMismatch { role: "admin".to_owned() },
        }
    );
}

#[test]
fn user_on_admin_route_goes_to_status_home() {
    let outcome = decide(&authorized("abc", Some(Role::User)), &RouteAccess::only([Role::Admin]), &paths());
    let GuardOutcome::Redirect { to, notice, .. } = outcome else {
        panic!("expected redirect, got {outcome:?}");
    };
    assert_eq!(to, "/user/status");
    assert_eq!(notice.as_deref(), Some(FORBIDDEN_NOTICE));
}

#[test]
fn unknown_role_forces_sign_out() {
    let state = authorized("abc", Some(Role::Other("guest".to_owned())));
    assert_eq!(
        decide(&state, &RouteAccess::only([Role::Admin]), &paths()),
        GuardOutcome::ForceSignOut { reason: GuardError::RoleMismatch { role: "guest".to_owned() } }
    );
}

#[test]
fn missing_role_forces_sign_out() {
    let outcome = decide(&authorized("abc", None), &RouteAccess::only([Role::User]), &paths());
    let GuardOutcome::ForceSignOut { reason } = outcome else {
        panic!("expected forced sign-out, got {outcome:?}");
    };
    assert_eq!(reason.to_string(), "role <none> may not access this route");
}

#[test]
fn malformed_allowed_roles_denies_to_sign_in() {
    let access = RouteAccess::from_value(Some(&json!("admin")));
    let outcome = decide(&authorized("xyz", Some(Role::Admin)), &access, &paths());
    assert_eq!(
        outcome,
        GuardOutcome::Redirect {
            to: "/sign-in".to_owned(),
            notice: None,
            reason: GuardError::RoleConfiguration(RoleConfigError::NotAnArray("\"admin\"".to_owned())),
        }
    );
}

#[test]
fn home_for_roles() {
    let paths = paths();
    assert_eq!(home_for(Some(&Role::Admin), &paths), Some("/admin/dashboard"));
    assert_eq!(home_for(Some(&Role::User), &paths), Some("/user/status"));
    assert_eq!(home_for(Some(&Role::Other("x".to_owned())), &paths), None);
    assert_eq!(home_for(None, &paths), None);
}
