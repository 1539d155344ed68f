//! REST API client for the certificate backend.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Other builds: every call fails with `ApiError::Unavailable`, which the
//! guard treats like any other fetch failure.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth/profile fetch
//! failures resolve into a deny decision rather than crashing the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Profile, SignInGrant};
#[cfg(feature = "csr")]
use super::types::{Envelope, SignInRequest};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("backend not available outside the browser")]
    Unavailable,
}

/// Backend operations the guard and the sign-in flow depend on.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Fetch the account profile for `token`.
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError>;
    /// Invalidate `token` server-side.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
    /// Exchange credentials for a session grant.
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInGrant, ApiError>;
}

/// `AuthBackend` over HTTP against `base_url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

impl AuthBackend for HttpBackend {
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint("users/profile"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let body: Envelope<Profile> = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint("users/profile"), bearer(token));
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint("auth/logout"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInGrant, ApiError> {
        #[cfg(feature = "csr")]
        {
            let payload = SignInRequest { email: email.to_owned(), password: password.to_owned() };
            let resp = gloo_net::http::Request::post(&self.endpoint("auth/login"))
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let body: Envelope<SignInGrant> = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }
}
