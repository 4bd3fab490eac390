//! Client error types.
//!
//! Provides error types for HTTP client operations, including the
//! normalization of API error envelopes.

use reqwest::StatusCode;
use serde::Deserialize;

/// Structured error returned by the API.
///
/// The API reports failures as `{"error": {"code": ..., "message": ...,
/// "detail": ...}}`. The originating HTTP status and the raw body text are
/// retained for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("api error {code}: {message} ({detail})")]
pub struct ApiError {
    /// Numeric error code from the envelope.
    pub code: i64,

    /// Human-readable error message.
    pub message: String,

    /// Additional error detail, may be empty.
    pub detail: String,

    /// HTTP status code of the response.
    pub status: u16,

    /// Raw response body text.
    pub raw: String,
}

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to serialize the request body.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// API returned a structured error response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// API returned a non-success status without a parseable error envelope.
    #[error("unexpected HTTP status {status}: {body}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// Failed to deserialize a successful response.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ClientError {
    /// Returns the HTTP status code for errors produced by a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}

/// API error envelope format.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: ErrorBody,
}

/// API error details. Fields are individually defaulted so partial
/// envelopes still decode.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    detail: String,
}

/// Normalizes a non-success response body into a [`ClientError`].
///
/// Failure bodies are expected to carry the structured error envelope, but
/// that is not guaranteed on every path (proxy errors, malformed gateway
/// responses). A decoded envelope with code zero means the body did not
/// actually contain a populated error object, so it takes the fallback path
/// along with everything that fails to decode.
pub(crate) fn normalize(status: StatusCode, body: &[u8]) -> ClientError {
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        if envelope.error.code != 0 {
            return ClientError::Api(ApiError {
                code: envelope.error.code,
                message: envelope.error.message,
                detail: envelope.error.detail,
                status: status.as_u16(),
                raw: String::from_utf8_lossy(body).into_owned(),
            });
        }
    }

    ClientError::Http {
        status: status.as_u16(),
        body: String::from_utf8_lossy(body).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_structured_error() {
        let body = br#"{"error":{"code":404,"message":"not found","detail":"event missing"}}"#;
        let err = normalize(StatusCode::NOT_FOUND, body);

        match err {
            ClientError::Api(api) => {
                assert_eq!(api.code, 404);
                assert_eq!(api.message, "not found");
                assert_eq!(api.detail, "event missing");
                assert_eq!(api.status, 404);
                assert!(api.raw.contains("event missing"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_non_json_body() {
        let err = normalize(StatusCode::INTERNAL_SERVER_ERROR, b"not json at all");

        match &err {
            ClientError::Http { status, body } => {
                assert_eq!(*status, 500);
                assert_eq!(body, "not json at all");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
        assert!(err.to_string().contains("not json at all"));
    }

    #[test]
    fn test_normalize_zero_code_falls_back() {
        let body = br#"{"error":{"code":0,"message":"","detail":""}}"#;
        let err = normalize(StatusCode::BAD_GATEWAY, body);

        match err {
            ClientError::Http { status, .. } => assert_eq!(status, 502),
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_missing_envelope_falls_back() {
        let err = normalize(StatusCode::BAD_GATEWAY, br#"{"message":"gateway exploded"}"#);
        assert!(matches!(err, ClientError::Http { status: 502, .. }));
    }

    #[test]
    fn test_normalize_partial_envelope() {
        let body = br#"{"error":{"code":403,"message":"forbidden"}}"#;
        let err = normalize(StatusCode::FORBIDDEN, body);

        match err {
            ClientError::Api(api) => {
                assert_eq!(api.code, 403);
                assert_eq!(api.message, "forbidden");
                assert_eq!(api.detail, "");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            code: 404,
            message: "not found".to_string(),
            detail: "event missing".to_string(),
            status: 404,
            raw: String::new(),
        };
        assert_eq!(err.to_string(), "api error 404: not found (event missing)");
    }

    #[test]
    fn test_error_status() {
        let err = normalize(StatusCode::NOT_FOUND, b"gone");
        assert_eq!(err.status(), Some(404));
        assert_eq!(ClientError::Timeout.status(), None);
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = ClientError::InvalidConfig("base_url cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: base_url cannot be empty"
        );
    }
}
