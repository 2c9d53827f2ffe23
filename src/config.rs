//! API configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Resolved once at process start and passed explicitly to `AdminApi::new`.
//! Nothing here is global or mutated after construction.

use std::time::Duration;

pub const BASE_URL_ENV: &str = "ADMIN_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "ADMIN_API_TIMEOUT_SECS";
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api/admins";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Whole-request timeout. `None` leaves the HTTP client default in place.
    pub request_timeout: Option<Duration>,
}

impl ApiConfig {
    /// Build a config for an explicit base URL with no timeout override.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), request_timeout: None }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `ADMIN_API_BASE_URL`: used verbatim; `DEFAULT_BASE_URL` when unset or blank
    /// - `ADMIN_API_TIMEOUT_SECS`: request timeout in whole seconds
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = resolve_base_url(std::env::var(BASE_URL_ENV).ok().as_deref());
        let request_timeout = parse_timeout_secs(std::env::var(TIMEOUT_ENV).ok().as_deref());
        Self { base_url, request_timeout }
    }

    /// Apply command-line overrides. A given value replaces whatever the
    /// environment supplied; `None` keeps it.
    #[must_use]
    pub fn with_overrides(mut self, base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(secs) = timeout_secs {
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Pick the configured base URL, falling back to `DEFAULT_BASE_URL` when the
/// value is absent or blank.
#[must_use]
pub fn resolve_base_url(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value.to_owned(),
        _ => DEFAULT_BASE_URL.to_owned(),
    }
}

fn parse_timeout_secs(raw: Option<&str>) -> Option<Duration> {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).map(Duration::from_secs)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
