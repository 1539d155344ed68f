//! Route manifest shared by the router and the navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each protected page's allowed roles come from `routes.json`. The router
//! hands an entry's `RouteAccess` to `ProtectedRoute`, and the navigation bar
//! filters the same entries, so both apply one rule.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use serde::{Deserialize, Deserializer};

use crate::guard::RouteAccess;
use crate::session::Role;

const MANIFEST: &str = include_str!("routes.json");

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub label: String,
    #[serde(default, rename = "allowedRoles", deserialize_with = "deserialize_access")]
    pub access: RouteAccess,
}

fn deserialize_access<'de, D>(deserializer: D) -> Result<RouteAccess, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(RouteAccess::from_value(Some(&value)))
}

/// Parse a manifest. A manifest that fails to parse yields no routes.
#[must_use]
pub fn parse_manifest(raw: &str) -> Vec<RouteEntry> {
    match serde_json::from_str::<Vec<RouteEntry>>(raw) {
        Ok(entries) => {
            for entry in &entries {
                if let Err(err) = entry.access.allowed() {
                    log::error!("route {}: {err}", entry.path);
                }
            }
            entries
        }
        Err(err) => {
            log::error!("route manifest unreadable: {err}");
            Vec::new()
        }
    }
}

/// Routes bundled with the dashboard.
#[must_use]
pub fn route_table() -> Vec<RouteEntry> {
    parse_manifest(MANIFEST)
}

/// Access policy for `path`. Unknown paths deny everyone.
#[must_use]
pub fn access_for(routes: &[RouteEntry], path: &str) -> RouteAccess {
    routes
        .iter()
        .find(|entry| entry.path == path)
        .map_or_else(|| RouteAccess::missing(path), |entry| entry.access.clone())
}

/// Entries the given role may navigate to.
#[must_use]
pub fn visible_routes<'a>(routes: &'a [RouteEntry], role: Option<&Role>) -> Vec<&'a RouteEntry> {
    routes.iter().filter(|entry| entry.access.permits(role)).collect()
}
