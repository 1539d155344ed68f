//! Guard and backend configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard ships as a static WASM bundle, so there is no process
//! environment at runtime. Values are captured with `option_env!` when the
//! bundle is built and fall back to typed defaults when absent or malformed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_REFRESH_TIMEOUT_MS: u64 = 300_000;
pub const DEFAULT_RELOAD_DELAY_MS: u64 = 1_000;

pub const SIGN_IN_PATH: &str = "/sign-in";
pub const ADMIN_HOME_PATH: &str = "/admin/dashboard";
pub const USER_HOME_PATH: &str = "/user/status";

/// Redirect destinations used by the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePaths {
    pub sign_in: String,
    pub admin_home: String,
    pub user_home: String,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            sign_in: SIGN_IN_PATH.to_owned(),
            admin_home: ADMIN_HOME_PATH.to_owned(),
            user_home: USER_HOME_PATH.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub api_base: String,
    /// Interval between coarse session refreshes (full page reloads).
    pub refresh_timeout: Duration,
    /// Delay between a refresh firing and the reload, so pending updates flush.
    pub reload_delay: Duration,
    pub paths: RoutePaths,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            refresh_timeout: Duration::from_millis(DEFAULT_REFRESH_TIMEOUT_MS),
            reload_delay: Duration::from_millis(DEFAULT_RELOAD_DELAY_MS),
            paths: RoutePaths::default(),
        }
    }
}

impl GuardConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `CERT_ADMIN_API_BASE`: default `/api`
    /// - `CERT_ADMIN_REFRESH_TIMEOUT_MS`: default 300000
    /// - `CERT_ADMIN_RELOAD_DELAY_MS`: default 1000
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(
            option_env!("CERT_ADMIN_API_BASE"),
            option_env!("CERT_ADMIN_REFRESH_TIMEOUT_MS"),
            option_env!("CERT_ADMIN_RELOAD_DELAY_MS"),
        )
    }

    fn from_raw(api_base: Option<&str>, refresh_ms: Option<&str>, reload_ms: Option<&str>) -> Self {
        Self {
            api_base: normalize_api_base(api_base),
            refresh_timeout: Duration::from_millis(parse_millis(refresh_ms, DEFAULT_REFRESH_TIMEOUT_MS)),
            reload_delay: Duration::from_millis(parse_millis(reload_ms, DEFAULT_RELOAD_DELAY_MS)),
            paths: RoutePaths::default(),
        }
    }
}

fn normalize_api_base(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Parse a positive millisecond count, falling back to `default` otherwise.
pub(crate) fn parse_millis(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default)
}
