//! Vendor admin client — API facade and list-view descriptors for the admin
//! dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves where the admin backend lives, `api` issues the auth and
//! vendor requests against it, `model` holds the wire records, and `table`
//! describes how category rows are laid out in a list view. The two halves
//! are independent: callers fetch with `api` and hand rows to `table`.

pub mod api;
pub mod config;
pub mod model;
pub mod table;

pub use api::{AdminApi, ApiError, ApiResponse};
pub use config::ApiConfig;
pub use model::{Billboard, Category, CategoryId, Credentials, RegistrationRequest};
