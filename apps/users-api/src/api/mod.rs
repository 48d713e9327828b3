//! API routes module
//!
//! Everything here is nested under `/api` by the HTTP server.

pub mod health;

use axum::Router;
use std::sync::Arc;

use crate::container::Container;

/// Create all API routes
pub fn routes(container: &Arc<Container>) -> Router {
    Router::new()
        .merge(domain_users::handlers::router(container.handler()))
        .merge(health::router(Arc::clone(container)))
}
