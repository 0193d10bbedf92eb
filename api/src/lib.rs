//! HTTP collaborator for the sign-up flow: endpoint configuration, the
//! registration call and its error type.

pub mod client;
pub mod config;
pub mod error;
mod timing;

pub use client::{is_success, RegisterClient, RegisterRequest};
pub use config::{endpoint_url, ApiConfig, DEFAULT_TIMEOUT_MS, REGISTER_PATH};
pub use error::ApiError;
