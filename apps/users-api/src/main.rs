use axum_helpers::HttpServer;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

mod api;
mod config;
mod container;
mod openapi;
mod shutdown;

use config::Config;
use container::Container;

/// Upper bound for each shutdown step (store, then HTTP server).
const SHUTDOWN_DEADLINE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let server = HttpServer::new::<openapi::ApiDoc>(config.app);

    let container = Container::build(&config.mongodb)
        .await
        .wrap_err("Failed to initialize container")?;
    let container = Arc::new(container);

    let server = server.nest_api(api::routes(&container));

    let handle = match server.start(&config.server).await {
        Ok(handle) => handle,
        Err(e) => {
            if let Err(close_err) = container.shutdown(SHUTDOWN_DEADLINE).await {
                error!("Error closing store connection: {}", close_err);
            }
            return Err(e)
                .wrap_err_with(|| format!("Failed to bind {}", config.server.address()));
        }
    };

    info!("Users API listening on {}", handle.local_addr());

    let signal = handle.coordinator().wait_for_signal().await;
    match &signal {
        Ok(signal) => info!(?signal, "Shutting down"),
        Err(e) => error!("Failed to listen for shutdown signals: {}", e),
    }

    let outcomes = shutdown::shutdown(&container, handle, SHUTDOWN_DEADLINE).await;
    let failed: Vec<_> = outcomes
        .iter()
        .filter(|outcome| outcome.error.is_some())
        .map(|outcome| outcome.step)
        .collect();
    info!(?failed, "Users API shutdown complete");

    signal.wrap_err("Signal handling failed")?;
    Ok(())
}
