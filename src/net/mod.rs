//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and `types` defines the wire schema. The guard
//! depends only on the `AuthBackend` trait so it can be exercised without a
//! browser.

pub mod api;
pub mod types;
