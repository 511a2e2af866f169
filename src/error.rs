//! Error types for the `uspto-odp` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, UsptoError>`.
//!
//! [`UsptoError`] covers:
//! - **API errors** — Structured error responses from the ODP (with status
//!   code, message, optional details, and a request-tracing identifier)
//! - **HTTP transport errors** — Network, TLS, timeout failures
//! - **JSON errors** — Deserialization failures
//! - **URL errors** — Malformed base URL construction
//! - **I/O errors** — Failures while saving downloaded documents
//! - **Invalid arguments** — Client-side validation errors

use std::fmt;

/// Error response returned by the USPTO Open Data Portal.
///
/// The ODP returns a JSON body of the shape
/// `{"code": 404, "error": "Not Found", "errorDetails": "...",
/// "requestIdentifier": "..."}` on failures. Some endpoints spell the
/// details field `errorDetailed`; both are accepted.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Numeric error code. Falls back to the HTTP status when absent.
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable error message (e.g. "Not Found").
    #[serde(default)]
    pub error: Option<String>,
    /// Additional detail about what went wrong.
    #[serde(default, alias = "errorDetailed")]
    pub error_details: Option<String>,
    /// Server-side identifier for tracing this request.
    #[serde(default)]
    pub request_identifier: Option<String>,
}

impl ApiErrorBody {
    /// Default message for the status codes the ODP documents.
    fn default_message(status: reqwest::StatusCode) -> &'static str {
        match status.as_u16() {
            400 => "Bad Request",
            403 => "Forbidden",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Unknown Error",
        }
    }

    /// Build an [`ApiErrorBody`] from a raw response body and its status.
    ///
    /// The body is parsed as the ODP error JSON when possible; missing
    /// fields fall back to the numeric status and its default message.
    pub fn from_response(status: reqwest::StatusCode, body: &str) -> Self {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or(ApiErrorBody {
            code: None,
            error: None,
            error_details: None,
            request_identifier: None,
        });
        ApiErrorBody {
            code: Some(parsed.code.unwrap_or(status.as_u16())),
            error: Some(
                parsed
                    .error
                    .unwrap_or_else(|| Self::default_message(status).to_owned()),
            ),
            error_details: parsed.error_details,
            request_identifier: parsed.request_identifier,
        }
    }

    /// The numeric error code (always present after [`Self::from_response`]).
    pub fn code(&self) -> u16 {
        self.code.unwrap_or(0)
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {}",
            self.code.unwrap_or(0),
            self.error.as_deref().unwrap_or("Unknown Error"),
            self.error_details.as_deref().unwrap_or("No details provided"),
        )
    }
}

/// All possible errors produced by the `uspto-odp` client.
#[derive(Debug, thiserror::Error)]
pub enum UsptoError {
    /// An error response returned by the ODP REST API (any non-2xx status).
    #[error("USPTO API error: {0}")]
    Api(ApiErrorBody),

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// An I/O error while writing a downloaded document to disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, UsptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_parses_odp_fields() {
        let body = r#"{"code": 404, "error": "Not Found",
                       "errorDetails": "No application found",
                       "requestIdentifier": "abc-123"}"#;
        let err = ApiErrorBody::from_response(reqwest::StatusCode::NOT_FOUND, body);
        assert_eq!(err.code(), 404);
        assert_eq!(err.error.as_deref(), Some("Not Found"));
        assert_eq!(err.error_details.as_deref(), Some("No application found"));
        assert_eq!(err.request_identifier.as_deref(), Some("abc-123"));
    }

    #[test]
    fn error_body_accepts_error_detailed_spelling() {
        let body = r#"{"code": 400, "error": "Bad Request",
                       "errorDetailed": "q is malformed"}"#;
        let err = ApiErrorBody::from_response(reqwest::StatusCode::BAD_REQUEST, body);
        assert_eq!(err.error_details.as_deref(), Some("q is malformed"));
    }

    #[test]
    fn error_body_defaults_on_empty_body() {
        let err = ApiErrorBody::from_response(reqwest::StatusCode::FORBIDDEN, "");
        assert_eq!(err.code(), 403);
        assert_eq!(err.error.as_deref(), Some("Forbidden"));
        assert!(err.error_details.is_none());

        let err = ApiErrorBody::from_response(reqwest::StatusCode::BAD_GATEWAY, "oops");
        assert_eq!(err.code(), 502);
        assert_eq!(err.error.as_deref(), Some("Unknown Error"));
    }

    #[test]
    fn display_includes_code_message_and_details() {
        let err = ApiErrorBody::from_response(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"error": "Not Found", "errorDetails": "gone"}"#,
        );
        assert_eq!(err.to_string(), "404: Not Found - gone");
    }
}
