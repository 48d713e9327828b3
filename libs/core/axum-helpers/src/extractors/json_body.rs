//! JSON body extractor with a single, uniform rejection.

use crate::errors::{AppError, messages};
use axum::{
    Json,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor built on [`axum::Json`].
///
/// The request must declare a JSON content type (`application/json` or a
/// `+json` suffix). Any failure (wrong or missing content type, unreadable
/// body, invalid JSON, wrong shape) is reported as a single
/// [`JsonBodyRejection`], so handlers can map it onto their own error by
/// extracting `Result<JsonBody<T>, JsonBodyRejection>`.
///
/// # Example
/// ```ignore
/// async fn create(payload: Result<JsonBody<User>, JsonBodyRejection>) -> Response {
///     let JsonBody(user) = payload.map_err(|_| MyError::InvalidJson)?;
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

/// Rejection produced when the request body is not the expected JSON.
#[derive(Debug, thiserror::Error)]
#[error("invalid JSON body: {reason}")]
pub struct JsonBodyRejection {
    reason: String,
}

impl JsonBodyRejection {
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        tracing::debug!(reason = %self.reason, "Rejected request body");
        AppError::BadRequest(messages::INVALID_JSON.to_string()).into_response()
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| JsonBody(value))
            .map_err(|e| JsonBodyRejection {
                reason: e.body_text(),
            })
    }
}
