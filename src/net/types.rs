//! Wire DTOs for the profile, logout, and sign-in endpoints.
//!
//! DESIGN
//! ======
//! The backend wraps every payload in a `data` envelope. Account status is an
//! open string on the wire; unrecognised values are kept rather than rejected
//! so a new server-side status never fails decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::Role;

/// `{ "data": T }` response wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Backend-authoritative account state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProfileStatus {
    Active,
    Inactive,
    Banned,
    Other(String),
}

impl ProfileStatus {
    /// Whether this status invalidates a locally cached session.
    #[must_use]
    pub fn revokes_session(&self) -> bool {
        matches!(self, Self::Inactive | Self::Banned)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Banned => "banned",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ProfileStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "banned" => Self::Banned,
            _ => Self::Other(raw),
        }
    }
}

impl From<ProfileStatus> for String {
    fn from(status: ProfileStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account profile as returned by `GET /users/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub status: ProfileStatus,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Credentials returned by a successful sign-in exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignInGrant {
    pub token: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
}
