use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::TwitError;

const USAGE_LIMIT_MARKER: &str = "usage limits are exceeded";

/// Error-shaped result returned in place of response data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ErrorResult {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ErrorResult {
    /// An error with a message only, used for transport failures.
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
            body: None,
        }
    }

    /// An error carrying the HTTP status code.
    pub fn status(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code: Some(code),
            body: None,
        }
    }
}

/// Outcome of a single API call: decoded JSON or an [`ErrorResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Data(Value),
    Error(ErrorResult),
}

impl From<ErrorResult> for ApiResponse {
    fn from(err: ErrorResult) -> Self {
        Self::Error(err)
    }
}

impl ApiResponse {
    /// Map an HTTP status and body to a response.
    pub(crate) fn from_status(status: u16, body: &str, endpoint: &str) -> Self {
        match status {
            200 => match serde_json::from_str(body) {
                Ok(value) => Self::Data(value),
                Err(e) => {
                    tracing::error!(endpoint, error = %e, "Error parsing JSON response");
                    ErrorResult::message(format!("Error parsing JSON response: {e}")).into()
                }
            },
            401 | 403 => {
                tracing::error!(status, "Authentication error: check your app-id and app-key");
                ErrorResult::status("Authentication failed", status).into()
            }
            404 => {
                tracing::error!(endpoint, "Resource not found");
                ErrorResult::status("Resource not found", status).into()
            }
            500 if body.contains(USAGE_LIMIT_MARKER) => {
                tracing::error!("API usage limits exceeded");
                ErrorResult::status("API usage limits exceeded", status).into()
            }
            500 => {
                tracing::error!(body, "Server error");
                ErrorResult::status("Server error", status).into()
            }
            _ => {
                tracing::error!(status, body, "Unexpected response");
                ErrorResult {
                    error: "Unexpected response".into(),
                    code: Some(status),
                    body: Some(body.to_string()),
                }
                .into()
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Data(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorResult> {
        match self {
            Self::Data(_) => None,
            Self::Error(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<Value, ErrorResult> {
        match self {
            Self::Data(value) => Ok(value),
            Self::Error(err) => Err(err),
        }
    }

    /// Decode successful response data into a typed model.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, TwitError> {
        let value = self.into_result()?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ok_body_is_decoded() {
        let resp = ApiResponse::from_status(200, r#"{"count":0,"shows":[]}"#, "/shows");
        assert_eq!(resp, ApiResponse::Data(json!({"count": 0, "shows": []})));
    }

    #[test]
    fn invalid_json_reports_parse_error() {
        let resp = ApiResponse::from_status(200, "<html>", "/shows");
        let err = resp.error().unwrap();
        assert!(err.error.starts_with("Error parsing JSON response"));
        assert_eq!(err.code, None);
    }

    #[test]
    fn auth_statuses_map_to_authentication_failed() {
        for status in [401, 403] {
            let resp = ApiResponse::from_status(status, "denied", "/shows");
            assert_eq!(
                resp,
                ApiResponse::from(ErrorResult::status("Authentication failed", status))
            );
        }
    }

    #[test]
    fn not_found_ignores_body() {
        let resp = ApiResponse::from_status(404, r#"{"detail":"nope"}"#, "/shows/9");
        assert_eq!(
            resp,
            ApiResponse::from(ErrorResult::status("Resource not found", 404))
        );
    }

    #[test]
    fn server_error_checks_usage_limit_marker() {
        let limited = ApiResponse::from_status(
            500,
            "Sorry, usage limits are exceeded for this plan",
            "/shows",
        );
        assert_eq!(
            limited,
            ApiResponse::from(ErrorResult::status("API usage limits exceeded", 500))
        );

        let generic = ApiResponse::from_status(500, "boom", "/shows");
        assert_eq!(
            generic,
            ApiResponse::from(ErrorResult::status("Server error", 500))
        );
    }

    #[test]
    fn other_status_keeps_raw_body() {
        let resp = ApiResponse::from_status(418, "teapot", "/streams");
        assert_eq!(
            resp.error(),
            Some(&ErrorResult {
                error: "Unexpected response".into(),
                code: Some(418),
                body: Some("teapot".into()),
            })
        );
    }

    #[test]
    fn error_serializes_without_absent_fields() {
        let resp: ApiResponse = ErrorResult::status("Resource not found", 404).into();
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"error": "Resource not found", "code": 404})
        );

        let resp: ApiResponse = ErrorResult::message("connection refused").into();
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"error": "connection refused"})
        );
    }

    #[test]
    fn decode_error_response_returns_api_error() {
        let resp: ApiResponse = ErrorResult::status("Server error", 500).into();
        let err = resp.decode::<Value>().unwrap_err();
        assert!(matches!(err, TwitError::Api(e) if e.code == Some(500)));
    }
}
