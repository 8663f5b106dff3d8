//! Advert error types with HTTP status code mapping.
//!
//! [`AdvertError`] is the single error type crossing every layer of the
//! crate: the document store, the message sink, the lifecycle service and
//! the HTTP handlers. Each variant maps to a numeric error code, an HTTP
//! status code and a structured JSON error response.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::AdvertId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "advert not found: 6f1c…"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see [`AdvertError::error_code`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Coarse error classification shared with callers.
///
/// `NotFound` and `Invalid` are client-correctable; `Transient` may be
/// retried by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced advert does not exist.
    NotFound,
    /// The submission or confirmation outcome is malformed.
    Invalid,
    /// The document store or message sink failed.
    Transient,
}

/// Error returned by every advert operation.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                 |
/// |-----------|------------|-----------------------------|
/// | 1000–1999 | Validation | 400 Bad Request             |
/// | 2000–2999 | Not Found  | 404 Not Found               |
/// | 3000–3999 | Transient  | 503 Service Unavailable     |
#[derive(Debug, thiserror::Error)]
pub enum AdvertError {
    /// No advert with the given identifier exists.
    #[error("advert not found: {0}")]
    NotFound(AdvertId),

    /// Submission or confirmation request failed validation.
    #[error("invalid request: {0}")]
    Invalid(String),

    /// The document store or message sink could not complete the call.
    #[error("transient failure: {0}")]
    Transient(String),
}

impl AdvertError {
    /// Builds an [`AdvertError::Invalid`] from any displayable message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// Builds an [`AdvertError::Transient`] from any displayable cause.
    #[must_use]
    pub fn transient(cause: impl std::fmt::Display) -> Self {
        Self::Transient(cause.to_string())
    }

    /// Returns the coarse kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Invalid(_) => ErrorKind::Invalid,
            Self::Transient(_) => ErrorKind::Transient,
        }
    }

    /// Returns `true` if the caller may retry the same request unchanged.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Transient)
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self.kind() {
            ErrorKind::Invalid => 1001,
            ErrorKind::NotFound => 2001,
            ErrorKind::Transient => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Invalid => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Transient => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<sqlx::Error> for AdvertError {
    fn from(err: sqlx::Error) -> Self {
        Self::transient(err)
    }
}

impl From<serde_json::Error> for AdvertError {
    fn from(err: serde_json::Error) -> Self {
        Self::transient(err)
    }
}

impl From<JsonRejection> for AdvertError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid(rejection.body_text())
    }
}

impl IntoResponse for AdvertError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(
            AdvertError::NotFound(AdvertId::from("x")).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(AdvertError::invalid("blank").kind(), ErrorKind::Invalid);
        assert_eq!(AdvertError::transient("down").kind(), ErrorKind::Transient);
    }

    #[test]
    fn only_transient_is_retryable() {
        assert!(AdvertError::transient("timeout").is_retryable());
        assert!(!AdvertError::invalid("blank title").is_retryable());
        assert!(!AdvertError::NotFound(AdvertId::from("x")).is_retryable());
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AdvertError::invalid("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AdvertError::NotFound(AdvertId::from("x")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AdvertError::transient("x").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn not_found_message_names_the_id() {
        let err = AdvertError::NotFound(AdvertId::from("abc-123"));
        assert_eq!(err.to_string(), "advert not found: abc-123");
        assert_eq!(err.error_code(), 2001);
    }

    #[test]
    fn response_carries_status() {
        let response = AdvertError::invalid("title must not be blank").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
