//! API outcome types — the response wrapper and the error taxonomy.

use serde::de::DeserializeOwned;
use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by admin API calls. The facade never recovers from these;
/// they go straight back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, DNS, timeout, body read).
    #[error("API request failed: {0}")]
    Request(String),

    /// The backend answered with a non-2xx status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON the caller expected.
    #[error("API response parse failed: {0}")]
    Decode(String),
}

impl ApiError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Request(_) => "E_API_REQUEST",
            Self::Status { .. } => "E_API_RESPONSE",
            Self::Decode(_) => "E_API_PARSE",
        }
    }

    /// Whether a caller could reasonably try again. The facade itself never does.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }

    /// HTTP status, when the backend produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// A successful backend reply, body passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body; `Value::Null` when the backend sent nothing.
    pub body: Value,
}

impl ApiResponse {
    /// Parse a raw 2xx body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if a non-empty body is not valid JSON.
    pub fn from_body(status: u16, text: &str) -> Result<Self, ApiError> {
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))?
        };
        Ok(Self { status, body })
    }

    /// Decode the body into a typed value, e.g. `Vec<Category>`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.body.clone()).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
