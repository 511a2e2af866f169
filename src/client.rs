//! Core HTTP client for the USPTO Open Data Portal API.
//!
//! The [`UsptoClient`] struct is the main entry point for interacting with
//! all ODP REST endpoints. It wraps [`reqwest::Client`] with the `X-API-KEY`
//! authentication header and provides typed `get`, `get_query`, and `post`
//! methods.
//!
//! API endpoint methods are added to `UsptoClient` via `impl` blocks in the
//! [`crate::api`] module.

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::constants::API_BASE_URL;
use crate::error::{ApiErrorBody, Result, UsptoError};

/// Core HTTP client for the USPTO Open Data Portal API.
///
/// Wraps [`reqwest::Client`] and injects the required `X-API-KEY` header
/// into every request. The header value is cached at construction time to
/// avoid per-request allocation.
///
/// The client is cheap to clone; clones share the underlying connection
/// pool, and calls may be issued concurrently from multiple tasks.
///
/// # Example
///
/// ```no_run
/// use uspto_odp::client::UsptoClient;
///
/// # #[tokio::main]
/// # async fn main() -> uspto_odp::error::Result<()> {
/// let client = UsptoClient::new("your-api-key");
/// let wrapper = client.get_patent_wrapper("16123456").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UsptoClient {
    http: reqwest::Client,
    /// The ODP API key.
    api_key: String,
    /// Base URL for REST API requests (defaults to [`API_BASE_URL`]).
    base_url: String,
    /// Pre-built `X-API-KEY` header value, cached to avoid per-request
    /// allocation.
    api_key_header: HeaderValue,
}

impl UsptoClient {
    /// Create a new `UsptoClient` with the given API key.
    ///
    /// Uses the default API base URL (`https://api.uspto.gov/api`).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, API_BASE_URL).expect("default base URL is valid")
    }

    /// Create a new `UsptoClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a mock server. Returns an error if the
    /// URL does not parse.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref();
        Url::parse(base_url)?;

        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .build()
            .expect("failed to build reqwest client");

        let api_key = api_key.into();
        let api_key_header =
            HeaderValue::from_str(&api_key).expect("API key contains invalid header characters");

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key_header,
        })
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET request and deserialize the JSON response.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(&url)
            .headers(self.auth_headers())
            .send()
            .await?;

        self.handle_response(resp).await
    }

    /// Perform a GET request with query parameters and deserialize the
    /// JSON response.
    ///
    /// `query` is any `Serialize` value that `serde_urlencoded` can encode;
    /// `None` fields are skipped.
    pub async fn get_query<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "GET (query)");

        let resp = self
            .http
            .get(&url)
            .query(query)
            .headers(self.auth_headers())
            .send()
            .await?;

        self.handle_response(resp).await
    }

    /// Perform a POST request with a JSON body and deserialize the response.
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let resp = self
            .http
            .post(&url)
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    /// Perform a GET request against an absolute URL and return the raw
    /// response for the caller to consume (bytes or a byte stream).
    ///
    /// Used for document and dataset downloads, whose URLs are returned by
    /// the API rather than built from [`Self::base_url`]. The `X-API-KEY`
    /// header is still attached. Non-2xx responses are mapped to
    /// [`UsptoError::Api`] before the body is consumed.
    pub async fn get_raw(&self, url: &str) -> Result<reqwest::Response> {
        tracing::debug!(%url, "GET (raw)");

        let resp = self
            .http
            .get(url)
            .headers(self.auth_headers())
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(self.parse_error_body(status, &body))
        }
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Per-request auth headers. Uses the cached [`HeaderValue`] — only the
    /// [`HeaderMap`] container is allocated per call (no string parsing).
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert("X-API-KEY", self.api_key_header.clone());
        headers
    }

    /// Read a response, returning either the deserialized body or a
    /// `UsptoError`.
    ///
    /// Uses `bytes()` + `serde_json::from_slice()` to avoid the overhead of
    /// UTF-8 validation that `text()` + `from_str()` would incur.
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await.unwrap_or_default();

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(UsptoError::Json)
        } else {
            let body = String::from_utf8_lossy(&bytes);
            Err(self.parse_error_body(status, &body))
        }
    }

    /// Parse the ODP's JSON error structure, falling back to defaults for
    /// the numeric status, and log it.
    pub(crate) fn parse_error_body(&self, status: reqwest::StatusCode, body: &str) -> UsptoError {
        let api_err = ApiErrorBody::from_response(status, body);
        tracing::error!(
            code = api_err.code(),
            error = api_err.error.as_deref().unwrap_or("Unknown Error"),
            details = api_err.error_details.as_deref().unwrap_or("No details provided"),
            request_id = api_err.request_identifier.as_deref().unwrap_or("No request ID provided"),
            "USPTO API error"
        );
        UsptoError::Api(api_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_with_and_without_leading_slash() {
        let client = UsptoClient::new("key");
        assert_eq!(
            client.url("/v1/patent/applications"),
            "https://api.uspto.gov/api/v1/patent/applications"
        );
        assert_eq!(
            client.url("v1/patent/status-codes"),
            "https://api.uspto.gov/api/v1/patent/status-codes"
        );
    }

    #[test]
    fn with_base_url_trims_trailing_slash() {
        let client = UsptoClient::with_base_url("key", "http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn with_base_url_rejects_garbage() {
        assert!(UsptoClient::with_base_url("key", "not a url").is_err());
    }
}
