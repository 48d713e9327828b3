//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::container::Container;

#[derive(Serialize, ToSchema)]
pub struct ReadyResponse {
    status: String,
    mongodb: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    response_time_ms: u64,
}

/// Create a readiness router
pub fn router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(container)
}

/// Readiness check - verifies the MongoDB connection
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Store reachable", body = ReadyResponse),
        (status = 503, description = "Store unreachable", body = ReadyResponse)
    )
)]
pub async fn readiness_check(
    State(container): State<Arc<Container>>,
) -> (StatusCode, Json<ReadyResponse>) {
    let health = database::mongodb::check_health_detailed(container.store().database()).await;

    let (status, label) = if health.healthy {
        (StatusCode::OK, "ready")
    } else {
        tracing::warn!(message = ?health.message, "Readiness check failed");
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status,
        Json(ReadyResponse {
            status: label.to_string(),
            mongodb: health.healthy,
            message: health.message,
            response_time_ms: health.response_time_ms,
        }),
    )
}
