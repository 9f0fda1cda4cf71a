//! Strict JSON body extraction.
//!
//! The API requires `content-type: application/json` on every bodied
//! request, compared by exact string equality, and reports decode failures
//! verbatim in the response body. axum's own `Json` extractor accepts
//! parameterized media types and shapes its own rejection bodies, so the
//! precondition is enforced by this extractor instead.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use super::error::AppError;

/// JSON request body with an exact content-type precondition.
///
/// Rejections map to the API's error taxonomy: 415 for a missing or
/// mismatched content-type, 500 if the body cannot be read, 400 with the
/// serde error text if it cannot be decoded.
pub struct StrictJson<T>(pub T);

impl<S, T> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        if content_type != "application/json" {
            return Err(AppError::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| AppError::Internal(err.to_string()))?;

        let value =
            serde_json::from_slice(&bytes).map_err(|err| AppError::BadRequest(err.to_string()))?;

        Ok(Self(value))
    }
}
