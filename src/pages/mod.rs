//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are thin. Access control is applied around them by `ProtectedRoute`
//! in `app`, never inside the page itself.

pub mod account;
pub mod admin_dashboard;
pub mod sign_in;
pub mod user_status;
