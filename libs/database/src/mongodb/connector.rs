use mongodb::{
    Client, Database,
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::MongoConfig;

/// Head start the driver's server selection gets over the connect deadline,
/// so an unreachable deployment surfaces as the driver error.
const SELECTION_MARGIN: Duration = Duration::from_secs(1);

/// Error type for MongoDB store operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    /// Driver error, passed through with its original message
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("timed out after {0:?} connecting to MongoDB")]
    ConnectTimeout(Duration),

    #[error("MongoDB client did not shut down within {0:?}")]
    ShutdownTimeout(Duration),
}

/// Owns the MongoDB connection pool and a handle to one logical database.
///
/// The pool is released by [`MongoStore::close`]; calling it again after the
/// first close is a no-op.
pub struct MongoStore {
    client: Mutex<Option<Client>>,
    database: Database,
}

impl MongoStore {
    /// Connect to MongoDB and verify the deployment with a `ping`.
    ///
    /// Requests Stable API version 1. The whole sequence (URI parsing, pool
    /// setup, probe) is bounded by `config.connect_timeout_secs`. If the probe
    /// fails the freshly built client is shut down before the error is
    /// returned. No retries.
    ///
    /// # Example
    /// ```ignore
    /// use database::mongodb::{MongoConfig, MongoStore};
    ///
    /// let config = MongoConfig::with_database("mongodb://localhost:27017", "testdb");
    /// let store = MongoStore::connect(&config).await?;
    /// ```
    #[instrument(skip(config), fields(database = %config.database))]
    pub async fn connect(config: &MongoConfig) -> Result<Self, MongoError> {
        info!("Attempting to connect to MongoDB at {}", config.redacted_url());

        let deadline = Duration::from_secs(config.connect_timeout_secs);
        let store = tokio::time::timeout(deadline, Self::connect_and_probe(config))
            .await
            .map_err(|_| MongoError::ConnectTimeout(deadline))??;

        info!("Successfully connected to MongoDB");
        Ok(store)
    }

    async fn connect_and_probe(config: &MongoConfig) -> Result<Self, MongoError> {
        let options = Self::client_options(config).await?;
        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        if let Err(e) = database.run_command(doc! { "ping": 1 }).await {
            warn!(error = %e, "MongoDB liveness probe failed, releasing client");
            client.shutdown().immediate(true).await;
            return Err(e.into());
        }

        Ok(Self::from_client(client, &config.database))
    }

    async fn client_options(config: &MongoConfig) -> Result<ClientOptions, MongoError> {
        let mut options = ClientOptions::parse(&config.url).await?;

        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        options.max_pool_size = Some(config.max_pool_size);
        options.min_pool_size = Some(config.min_pool_size);
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
        options.server_selection_timeout = Some(Self::server_selection_timeout(config));

        if let Some(ref app_name) = config.app_name {
            options.app_name = Some(app_name.clone());
        }

        Ok(options)
    }

    /// Configured server selection timeout, capped below the connect deadline.
    fn server_selection_timeout(config: &MongoConfig) -> Duration {
        let deadline = Duration::from_secs(config.connect_timeout_secs);
        let configured = Duration::from_secs(config.server_selection_timeout_secs);
        configured.min(deadline.saturating_sub(SELECTION_MARGIN))
    }

    /// Wrap an existing client without probing it.
    ///
    /// Useful for tests and tools that manage connectivity themselves.
    pub fn from_client(client: Client, database: &str) -> Self {
        let database = client.database(database);
        Self {
            client: Mutex::new(Some(client)),
            database,
        }
    }

    /// Handle to the configured logical database
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Name of the configured logical database
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Whether [`MongoStore::close`] has already released the pool
    pub async fn is_closed(&self) -> bool {
        self.client.lock().await.is_none()
    }

    /// Shut the connection pool down within `deadline`.
    ///
    /// Idempotent: once the pool has been taken, further calls return `Ok(())`
    /// immediately.
    #[instrument(skip(self), fields(database = %self.database.name()))]
    pub async fn close(&self, deadline: Duration) -> Result<(), MongoError> {
        let Some(client) = self.client.lock().await.take() else {
            debug!("MongoDB client already closed");
            return Ok(());
        };

        tokio::time::timeout(deadline, client.shutdown())
            .await
            .map_err(|_| MongoError::ShutdownTimeout(deadline))?;

        info!("MongoDB client closed");
        Ok(())
    }
}
