//! Ordered shutdown: release the store, then stop the HTTP server.

use axum_helpers::ServerHandle;
use std::time::Duration;
use tracing::{error, info};

use crate::container::Container;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownStep {
    Store,
    Http,
}

/// Result of one shutdown step, in the order it ran.
#[derive(Debug)]
pub struct StepOutcome {
    pub step: ShutdownStep,
    pub error: Option<String>,
}

/// Close the container, then drain and stop the server.
///
/// Each step gets its own `deadline`. A failing step is logged and the next
/// one still runs.
pub async fn shutdown(
    container: &Container,
    server: ServerHandle,
    deadline: Duration,
) -> Vec<StepOutcome> {
    let mut outcomes = Vec::with_capacity(2);

    let error = match container.shutdown(deadline).await {
        Ok(()) => {
            info!("Store connection closed");
            None
        }
        Err(e) => {
            error!("Error closing store connection: {}", e);
            Some(e.to_string())
        }
    };
    outcomes.push(StepOutcome {
        step: ShutdownStep::Store,
        error,
    });

    let error = match server.shutdown(deadline).await {
        Ok(()) => {
            info!("HTTP server closed");
            None
        }
        Err(e) => {
            error!("Error shutting down HTTP server: {}", e);
            Some(e.to_string())
        }
    };
    outcomes.push(StepOutcome {
        step: ShutdownStep::Http,
        error,
    });

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api, openapi};
    use axum_helpers::HttpServer;
    use core_config::{AppInfo, server::ServerConfig};
    use std::sync::Arc;

    async fn running_server(container: &Arc<Container>) -> ServerHandle {
        let config = ServerConfig::new("127.0.0.1".to_string(), 0);
        HttpServer::new::<openapi::ApiDoc>(AppInfo {
            name: "users_api",
            version: "0.0.0",
        })
        .nest_api(api::routes(container))
        .start(&config)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_store_closes_before_http_server() {
        let container = Arc::new(Container::offline().await);
        let server = running_server(&container).await;
        let addr = server.local_addr();

        let outcomes = shutdown(&container, server, Duration::from_secs(5)).await;

        let steps: Vec<_> = outcomes.iter().map(|o| o.step).collect();
        assert_eq!(steps, vec![ShutdownStep::Store, ShutdownStep::Http]);
        assert!(outcomes.iter().all(|o| o.error.is_none()));

        assert!(container.store().is_closed().await);
        assert!(tokio::net::TcpStream::connect(addr).await.is_err());
    }

    #[tokio::test]
    async fn test_http_server_still_stops_after_store_already_closed() {
        let container = Arc::new(Container::offline().await);
        container.shutdown(Duration::from_secs(5)).await.unwrap();
        let server = running_server(&container).await;

        let outcomes = shutdown(&container, server, Duration::from_secs(5)).await;

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.error.is_none()));
    }
}
