use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use url::Url;

use super::*;

/// Why a request URL could not be built.
#[derive(Debug, thiserror::Error)]
pub enum UrlError {
    #[error(transparent)]
    Parse(#[from] url::ParseError),

    #[error("invalid resource id: {0:?}")]
    InvalidId(String),
}

/// A single GET against one endpoint, consumed by [`TwitApiClient::execute`].
#[derive(Debug, Clone, Copy)]
pub struct ApiRequest<'a> {
    pub endpoint: &'a str,
    /// Resource ID appended to `endpoint` as a single path segment.
    pub id: Option<&'a str>,
    pub query: &'a [(&'a str, &'a str)],
}

impl<'a> ApiRequest<'a> {
    pub fn new(endpoint: &'a str, query: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            endpoint,
            id: None,
            query,
        }
    }

    /// Request for one item of a collection, e.g. `/shows/{id}`.
    pub fn item(endpoint: &'a str, id: &'a str, query: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            endpoint,
            id: Some(id),
            query,
        }
    }

    /// `base_url + endpoint`, plus the percent-encoded item ID and a
    /// form-encoded query string when parameters are present. Spaces in
    /// the query encode as `+`.
    pub fn url(&self, base_url: &str) -> Result<Url, UrlError> {
        let mut url = Url::parse(&format!("{base_url}{}", self.endpoint))?;
        if let Some(id) = self.id {
            // Dot segments would be dropped and land on the collection.
            if id.is_empty() || id == "." || id == ".." {
                return Err(UrlError::InvalidId(id.to_string()));
            }
            // `/`, `?` and `#` in the ID stay inside the segment.
            url.path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithoutBase)?
                .push(id);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter().copied());
        }
        Ok(url)
    }
}

impl TwitApiClient {
    /// Build the `Accept`, `app-id` and `app-key` headers.
    fn auth_headers(&self) -> Result<HeaderMap, reqwest::header::InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("app-id", HeaderValue::from_str(self.credentials.app_id())?);
        headers.insert("app-key", HeaderValue::from_str(self.credentials.app_key())?);
        Ok(headers)
    }

    /// Execute one GET and map the outcome to an [`ApiResponse`].
    ///
    /// Never fails: URL, header and transport errors all come back as
    /// [`ApiResponse::Error`] with only `error` set.
    pub async fn execute(&self, request: ApiRequest<'_>) -> ApiResponse {
        let url = match request.url(self.credentials.base_url()) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(endpoint = request.endpoint, error = %e, "Error creating request");
                return ErrorResult::message(format!("Error creating request: {e}")).into();
            }
        };
        let headers = match self.auth_headers() {
            Ok(headers) => headers,
            Err(e) => {
                tracing::error!(error = %e, "Error creating request");
                return ErrorResult::message(format!("Error creating request: {e}")).into();
            }
        };

        tracing::debug!(url = %url, "Making request");

        let resp = match self.http.get(url).headers(headers).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(error = %e, "Request failed");
                return ErrorResult::message(e.to_string()).into();
            }
        };

        let status = resp.status().as_u16();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(status, error = %e, "Request failed while reading body");
                return ErrorResult::message(e.to_string()).into();
            }
        };

        ApiResponse::from_status(status, &body, request.endpoint)
    }
}
