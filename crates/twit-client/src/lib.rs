//! TWiT.tv API client library.
//!
//! Provides credentials file loading and a REST client for the
//! shows, episodes, streams and people endpoints.

pub mod api;
pub mod credentials;

pub use api::{ApiResponse, ErrorResult, TwitApiClient};
pub use credentials::{ConfigError, Credentials};

/// Unified error type for the twit-client crate.
///
/// Request methods never return this; they report failures as
/// [`ApiResponse::Error`]. It covers construction and typed decoding.
#[derive(Debug, thiserror::Error)]
pub enum TwitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TWiT API error: {0}")]
    Api(#[from] ErrorResult),
}
