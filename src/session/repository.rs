//! Session repository over a `KeyValueStore`.
//!
//! INVARIANTS
//! ==========
//! - A session exists only while `token` is present and non-empty.
//! - `set` and `clear` touch all three keys; `clear` is idempotent.

#[cfg(test)]
#[path = "repository_test.rs"]
mod repository_test;

use super::role::Role;
use super::store::{BrowserStorage, KeyValueStore};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const EMAIL_KEY: &str = "email";

/// The client's cached belief about the signed-in identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer credential.
    pub token: String,
    /// `None` when the role key is missing.
    pub role: Option<Role>,
    /// Display-only identity.
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct SessionRepository<S> {
    store: S,
}

impl SessionRepository<BrowserStorage> {
    /// Repository backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current session, or `None` when no usable token is stored.
    pub fn get(&self) -> Option<Session> {
        let token = self.store.get_item(TOKEN_KEY).filter(|t| !t.trim().is_empty())?;
        Some(Session {
            token,
            role: self.role(),
            email: self.store.get_item(EMAIL_KEY).filter(|e| !e.is_empty()),
        })
    }

    /// Stored role, independent of whether a token is present.
    pub fn role(&self) -> Option<Role> {
        self.store
            .get_item(ROLE_KEY)
            .filter(|r| !r.trim().is_empty())
            .map(|r| Role::parse(&r))
    }

    pub fn set(&self, session: &Session) {
        self.store.set_item(TOKEN_KEY, &session.token);
        match &session.role {
            Some(role) => self.store.set_item(ROLE_KEY, role.as_str()),
            None => self.store.remove_item(ROLE_KEY),
        }
        match &session.email {
            Some(email) => self.store.set_item(EMAIL_KEY, email),
            None => self.store.remove_item(EMAIL_KEY),
        }
    }

    /// Remove every session key.
    pub fn clear(&self) {
        self.store.remove_item(TOKEN_KEY);
        self.store.remove_item(ROLE_KEY);
        self.store.remove_item(EMAIL_KEY);
    }
}
