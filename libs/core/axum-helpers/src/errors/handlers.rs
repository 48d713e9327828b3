use axum::response::{IntoResponse, Response};

use super::{AppError, messages};

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback.
pub async fn not_found() -> Response {
    AppError::NotFound(messages::NOT_FOUND_RESOURCE.to_string()).into_response()
}
