//! Client-side session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in browser `localStorage` under three string keys and is
//! shared with the sign-in and sign-out flows. All access goes through
//! `SessionRepository` so the keys are written and cleared as one unit.

pub mod repository;
pub mod role;
pub mod store;

pub use repository::{EMAIL_KEY, ROLE_KEY, Session, SessionRepository, TOKEN_KEY};
pub use role::Role;
pub use store::{BrowserStorage, KeyValueStore, MemoryStorage};
