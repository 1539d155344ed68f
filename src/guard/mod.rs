//! Route-level session guard.
//!
//! ARCHITECTURE
//! ============
//! - `access`: allowed-roles policy shared by the guard and navigation.
//! - `check`: mount-time session validation against the backend.
//! - `decision`: pure mapping from guard state to render/redirect outcome.
//! - `lifecycle`: per-mount liveness and refresh gating.
//!
//! The Leptos wiring lives in `components::protected_route`; everything here
//! is browser-independent and unit-tested natively.

pub mod access;
pub mod check;
pub mod decision;
pub mod lifecycle;

pub use access::{AllowedRoles, RoleConfigError, RouteAccess};
pub use check::{GuardError, GuardState, check_session, sign_out};
pub use decision::{FORBIDDEN_NOTICE, GuardOutcome, decide, home_for};
pub use lifecycle::GuardLifecycle;
