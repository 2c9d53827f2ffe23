//! Admin API client — auth and vendor endpoints.
//!
//! DESIGN
//! ======
//! One `reqwest::Client` per `AdminApi`, built from an explicit `ApiConfig`.
//! Requests with a body are sent as JSON. Every public call issues exactly
//! one request: no retry, no caching, no batching. Failures are returned as
//! `ApiError` without classification beyond what the error itself carries.

pub mod types;

use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;

use crate::config::ApiConfig;
use crate::model::{Credentials, RegistrationRequest};

pub use types::{ApiError, ApiResponse};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const VENDORS_PATH: &str = "/vendors";

#[derive(Debug, Clone)]
pub struct AdminApi {
    http: reqwest::Client,
    base_url: String,
}

impl AdminApi {
    /// Build the client for `config`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::HttpClientBuild` if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        // Content-Type is set per request by `.json()`, so body-less calls omit it.
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// `POST /auth/login` with the credentials as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or malformed JSON.
    pub async fn login(&self, credentials: &Credentials) -> Result<ApiResponse, ApiError> {
        self.send(Method::POST, LOGIN_PATH, Some(credentials)).await
    }

    /// `POST /auth/register` with the request as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or malformed JSON.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<ApiResponse, ApiError> {
        self.send(Method::POST, REGISTER_PATH, Some(request)).await
    }

    /// `GET /vendors` with no body or query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or malformed JSON.
    pub async fn list_vendors(&self) -> Result<ApiResponse, ApiError> {
        self.send::<()>(Method::GET, VENDORS_PATH, None).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "admin api request");

        let request = self.http.request(method.clone(), &url);
        let request = if let Some(body) = body { request.json(body) } else { request };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "admin api request rejected");
            return Err(ApiError::Status { status: status.as_u16(), body: text });
        }
        ApiResponse::from_body(status.as_u16(), &text)
    }
}

/// Join a base URL and a relative path with exactly one `/` between them.
/// The base URL is otherwise left untouched.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_owned();
    }
    format!("{base}/{path}")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
