//! # Axum Helpers
//!
//! Utilities shared by the HTTP applications in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: HTTP server assembly, background serving, graceful shutdown, health
//! - **[`errors`]**: `{"error": ...}` response bodies and the `AppError` mapping
//! - **[`extractors`]**: Custom extractors (JSON body with a uniform rejection)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::HttpServer;
//! use core_config::{app_info, server::ServerConfig};
//!
//! let server = HttpServer::new::<ApiDoc>(app_info!()).nest_api(api_routes);
//! let handle = server.start(&ServerConfig::default()).await?;
//! handle.coordinator().wait_for_signal().await?;
//! handle.shutdown(Duration::from_secs(5)).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export server types
pub use server::{
    HealthResponse, HttpServer, ServerHandle, ShutdownCoordinator, ShutdownSignal, health_router,
};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{JsonBody, JsonBodyRejection};
