//! Allowed-roles policy attached to a route.
//!
//! DESIGN
//! ======
//! Route configuration may arrive loosely typed (the route manifest is JSON).
//! It is converted into `RouteAccess` once, at the boundary. A malformed value
//! is carried as an error so the guard can hard-deny instead of passing.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use std::collections::BTreeSet;

use serde_json::Value;

use crate::session::Role;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoleConfigError {
    #[error("allowed roles must be an array of strings, got {0}")]
    NotAnArray(String),
    #[error("allowed roles entry {index} is not a string")]
    NonStringEntry { index: usize },
    #[error("no access policy configured for route {0}")]
    MissingRoute(String),
}

/// Roles permitted on a route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedRoles {
    /// Any signed-in role.
    #[default]
    Unrestricted,
    Only(BTreeSet<Role>),
}

impl AllowedRoles {
    /// Restrict to `roles`. An empty set means unrestricted.
    pub fn only(roles: impl IntoIterator<Item = Role>) -> Self {
        let set: BTreeSet<Role> = roles.into_iter().collect();
        if set.is_empty() { Self::Unrestricted } else { Self::Only(set) }
    }

    /// The allowed-roles rule used by both the guard and the navigation filter.
    #[must_use]
    pub fn permits(&self, role: Option<&Role>) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Only(set) => role.is_some_and(|r| set.contains(r)),
        }
    }

    /// Convert a loosely typed value. `null` and `[]` mean unrestricted.
    ///
    /// # Errors
    ///
    /// Returns `RoleConfigError` when the value is not an array of strings.
    pub fn from_value(value: &Value) -> Result<Self, RoleConfigError> {
        match value {
            Value::Null => Ok(Self::Unrestricted),
            Value::Array(items) => {
                let mut roles = BTreeSet::new();
                for (index, item) in items.iter().enumerate() {
                    let Value::String(name) = item else {
                        return Err(RoleConfigError::NonStringEntry { index });
                    };
                    roles.insert(Role::parse(name));
                }
                Ok(Self::only(roles))
            }
            other => Err(RoleConfigError::NotAnArray(other.to_string())),
        }
    }
}

/// Validated route policy, or the configuration error that replaced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteAccess(Result<AllowedRoles, RoleConfigError>);

impl Default for RouteAccess {
    fn default() -> Self {
        Self(Ok(AllowedRoles::Unrestricted))
    }
}

impl From<AllowedRoles> for RouteAccess {
    fn from(roles: AllowedRoles) -> Self {
        Self(Ok(roles))
    }
}

impl From<RoleConfigError> for RouteAccess {
    fn from(err: RoleConfigError) -> Self {
        Self(Err(err))
    }
}

impl RouteAccess {
    pub fn only(roles: impl IntoIterator<Item = Role>) -> Self {
        AllowedRoles::only(roles).into()
    }

    /// Access from an optional loosely typed value; absent means unrestricted.
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Self {
        Self(value.map_or(Ok(AllowedRoles::Unrestricted), AllowedRoles::from_value))
    }

    /// Policy for a route with no manifest entry. Always denies.
    pub fn missing(path: impl Into<String>) -> Self {
        RoleConfigError::MissingRoute(path.into()).into()
    }

    /// # Errors
    ///
    /// Returns the configuration error when the policy was malformed.
    pub fn allowed(&self) -> Result<&AllowedRoles, &RoleConfigError> {
        self.0.as_ref()
    }

    /// Whether `role` may see the route. Malformed policies permit nobody.
    #[must_use]
    pub fn permits(&self, role: Option<&Role>) -> bool {
        self.0.as_ref().is_ok_and(|allowed| allowed.permits(role))
    }
}
