//! Wire records exchanged with the admin backend.

use std::fmt;

use serde::{Deserialize, Serialize};

const PASSWORD_MASK: &str = "********";

// =============================================================================
// AUTH PAYLOADS
// =============================================================================

/// Login payload. Sent as-is; the backend owns validation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &PASSWORD_MASK)
            .finish()
    }
}

/// Registration payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationRequest {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &PASSWORD_MASK)
            .finish()
    }
}

// =============================================================================
// CATEGORY
// =============================================================================

/// Category identifier. Backends hand these out as strings or integers;
/// both are accepted and kept in their original JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CategoryId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for CategoryId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Vendor category as listed by the backend. Read-only view; the backend
/// owns the canonical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub billboard: Option<Billboard>,
}

/// Billboard projection. Missing or null fields render as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Billboard {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Billboard {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: Some(title.into()), description: Some(description.into()) }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
