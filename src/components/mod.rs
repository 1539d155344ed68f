//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `protected_route` wraps route pages with the session guard; `nav` and
//! `notice_banner` form the dashboard chrome around them.

pub mod nav;
pub mod notice_banner;
pub mod protected_route;
