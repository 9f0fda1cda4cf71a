//! HTTP error handling and response types.
//!
//! Errors are reported once, as plain text, with exactly one status line
//! per request: the status is chosen here, before any body bytes are
//! written.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application error type for HTTP handlers and extractors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed JSON in the request body. Carries the decode error text.
    #[error("{0}")]
    BadRequest(String),
    /// Missing or mismatched content-type header. Carries the received value.
    #[error("need content-type 'application/json', but got '{0}'")]
    UnsupportedMediaType(String),
    /// Request body could not be read.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_media_type_names_received_value() {
        let err = AppError::UnsupportedMediaType("text/plain".to_string());
        assert_eq!(
            err.to_string(),
            "need content-type 'application/json', but got 'text/plain'"
        );
    }

    #[test]
    fn test_status_mapping() {
        let response = AppError::BadRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::UnsupportedMediaType(String::new()).into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let response = AppError::Internal("io".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
