use super::health::health_router;
use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use axum::Router;
use core_config::AppInfo;
use core_config::server::ServerConfig;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, error, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// HTTP server builder.
///
/// Holds the base router (API docs and `/health`) until domain routes are
/// registered, then serves on a background task.
///
/// # Example
/// ```ignore
/// let server = HttpServer::new::<ApiDoc>(app_info!());
/// let handle = server.nest_api(user_routes).start(&config.server).await?;
/// ```
pub struct HttpServer {
    router: Router,
    coordinator: ShutdownCoordinator,
}

impl HttpServer {
    /// Create a server with Swagger UI at `/swagger-ui` (document at
    /// `/api-docs/openapi.json`) and the liveness route.
    pub fn new<T>(app_info: AppInfo) -> Self
    where
        T: OpenApi + 'static,
    {
        let router = Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
            .merge(health_router(app_info));

        Self {
            router,
            coordinator: ShutdownCoordinator::default(),
        }
    }

    /// Mount API routes under `/api`. Routes must already carry their state.
    pub fn nest_api(mut self, apis: Router) -> Self {
        self.router = self.router.nest("/api", apis);
        self
    }

    /// Merge routes at the root level.
    pub fn merge(mut self, routes: Router) -> Self {
        self.router = self.router.merge(routes);
        self
    }

    /// Coordinator used to stop the server once started.
    pub fn coordinator(&self) -> &ShutdownCoordinator {
        &self.coordinator
    }

    /// Final router: registered routes, 404 fallback and request tracing.
    pub fn into_router(self) -> Router {
        Self::finish(self.router)
    }

    fn finish(router: Router) -> Router {
        router.fallback(not_found).layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
    }

    /// Bind `host:port` and serve on a background task.
    ///
    /// # Errors
    /// Returns an error if the TCP listener fails to bind.
    pub async fn start(self, server_config: &ServerConfig) -> io::Result<ServerHandle> {
        let listener = TcpListener::bind(server_config.address()).await?;
        let local_addr = listener.local_addr()?;
        let coordinator = self.coordinator;
        let router = Self::finish(self.router);

        let shutdown = coordinator.notified();
        let task = tokio::spawn(async move {
            axum::serve(listener, router.into_make_service())
                .with_graceful_shutdown(shutdown)
                .await
                .inspect_err(|e| error!("Server encountered an error: {:?}", e))
        });

        info!("Server listening on {}", local_addr);

        Ok(ServerHandle {
            coordinator,
            task,
            local_addr,
        })
    }
}

/// Handle to a running server.
pub struct ServerHandle {
    coordinator: ShutdownCoordinator,
    task: JoinHandle<io::Result<()>>,
    local_addr: SocketAddr,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn coordinator(&self) -> &ShutdownCoordinator {
        &self.coordinator
    }

    /// Stop accepting connections and drain in-flight requests.
    ///
    /// Requests still running after `timeout` are dropped with the server task.
    pub async fn shutdown(mut self, timeout: Duration) -> io::Result<()> {
        self.coordinator.shutdown();

        match tokio::time::timeout(timeout, &mut self.task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(io::Error::other(join_err)),
            Err(_) => {
                warn!("Server did not drain within {:?}, aborting", timeout);
                self.task.abort();
                Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "HTTP server shutdown timed out",
                ))
            }
        }
    }
}
