//! Credentials file loading.
//!
//! The credentials file is a small indented `key: value` document:
//!
//! ```text
//! twit_api:
//!   app_id: your-app-id
//!   app_key: your-app-key      # keep this private
//!   base_url: https://twit.tv/api/v1.0
//! ```

mod parser;

use std::fmt;
use std::path::{Path, PathBuf};

pub use parser::{ConfigDocument, parse_document};

/// Base URL used when the credentials file does not set one.
pub const DEFAULT_BASE_URL: &str = "https://twit.tv/api/v1.0";

/// Section of the credentials file holding the API keys.
pub const SECTION: &str = "twit_api";

/// Errors raised while building [`Credentials`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("credentials file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("missing required field: twit_api.{0}")]
    MissingField(&'static str),

    #[error("failed to read credentials file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// API key pair plus the base URL every request is built from.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    app_id: String,
    app_key: String,
    base_url: String,
}

impl Credentials {
    /// Validate and build credentials from explicit values.
    ///
    /// An empty or missing `base_url` falls back to [`DEFAULT_BASE_URL`].
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let app_id = app_id.into();
        let app_key = app_key.into();

        if app_id.trim().is_empty() {
            return Err(ConfigError::MissingField("app_id"));
        }
        if app_key.trim().is_empty() {
            return Err(ConfigError::MissingField("app_key"));
        }

        let base_url = base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            app_id,
            app_key,
            base_url,
        })
    }

    /// Read and parse a credentials file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let credentials = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            app_id = %credentials.app_id,
            base_url = %credentials.base_url,
            "Loaded TWiT API credentials"
        );
        Ok(credentials)
    }

    /// Build credentials from the text of a credentials file.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc = parse_document(content);
        let field = |key: &str| doc.get(SECTION, key).map(str::to_string);

        Self::new(
            field("app_id").unwrap_or_default(),
            field("app_key").unwrap_or_default(),
            field("base_url"),
        )
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The app key with every character replaced by `*`.
    pub fn masked_app_key(&self) -> String {
        "*".repeat(self.app_key.chars().count())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_key", &self.masked_app_key())
            .field("base_url", &self.base_url)
            .finish()
    }
}
