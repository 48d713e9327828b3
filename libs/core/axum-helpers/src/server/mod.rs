//! Server infrastructure module.
//!
//! This module provides:
//! - Application assembly with OpenAPI documentation ([`HttpServer`])
//! - Serving on a background task with a [`ServerHandle`] for shutdown
//! - Signal handling and shutdown broadcast ([`ShutdownCoordinator`])
//! - The `/health` liveness endpoint
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::HttpServer;
//!
//! let handle = HttpServer::new::<ApiDoc>(app_info!())
//!     .nest_api(api_routes)
//!     .start(&config.server)
//!     .await?;
//!
//! handle.coordinator().wait_for_signal().await?;
//! // close databases here, then stop accepting requests
//! handle.shutdown(Duration::from_secs(5)).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{HttpServer, ServerHandle};
pub use health::{HealthResponse, health_router};
pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
