//! TWiT.tv REST API client.
//!
//! Every endpoint method performs a single GET with `app-id` / `app-key`
//! header injection and resolves to an [`ApiResponse`]. Transport and
//! status failures are folded into [`ErrorResult`] values instead of
//! being returned as `Err`.

mod episodes;
mod people;
mod request;
mod response;
mod shows;
mod streams;

pub mod models;

pub use models::{Show, ShowDetail, ShowList, Stream, StreamList};
pub use request::{ApiRequest, UrlError};
pub use response::{ApiResponse, ErrorResult};

use std::path::Path;

use crate::credentials::{ConfigError, Credentials};

/// TWiT API client bound to one set of credentials.
#[derive(Debug, Clone)]
pub struct TwitApiClient {
    pub(super) http: reqwest::Client,
    pub(super) credentials: Credentials,
}

impl TwitApiClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_http_client(credentials, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies).
    pub fn with_http_client(credentials: Credentials, http: reqwest::Client) -> Self {
        Self { http, credentials }
    }

    /// Load credentials from `path` and build a client from them.
    pub fn from_credentials_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Credentials::load(path).map(Self::new)
    }

    pub fn base_url(&self) -> &str {
        self.credentials.base_url()
    }

    pub fn app_id(&self) -> &str {
        self.credentials.app_id()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}
