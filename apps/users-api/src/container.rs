//! Manual dependency wiring.
//!
//! Builds the object graph once at startup:
//! store client → repository → service → handler.
//! Shutdown runs in reverse, which today only means releasing the store.

use database::mongodb::{MongoConfig, MongoError, MongoStore};
use domain_users::{MongoUserRepository, UserHandler, UserService};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info};

pub struct Container {
    store: MongoStore,
    repository: Arc<MongoUserRepository>,
    handler: UserHandler<MongoUserRepository>,
    shut_down: AtomicBool,
}

impl Container {
    /// Connect to the store and wire the user components on top of it.
    ///
    /// Fails if the store cannot be reached within its connect deadline.
    pub async fn build(config: &MongoConfig) -> Result<Self, MongoError> {
        let store = MongoStore::connect(config).await?;
        info!(database = store.database_name(), "Container store ready");
        Ok(Self::from_store(store))
    }

    /// Wire the user components over an existing store client.
    pub fn from_store(store: MongoStore) -> Self {
        let repository = Arc::new(MongoUserRepository::new(store.database()));
        let service = UserService::from_shared(Arc::clone(&repository));
        let handler = UserHandler::new(service);

        Self {
            store,
            repository,
            handler,
            shut_down: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &MongoStore {
        &self.store
    }

    pub fn handler(&self) -> UserHandler<MongoUserRepository> {
        self.handler.clone()
    }

    /// Release external resources in reverse construction order.
    ///
    /// Only the first call does any work.
    pub async fn shutdown(&self, deadline: Duration) -> Result<(), MongoError> {
        if self
            .shut_down
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Container already shut down");
            return Ok(());
        }

        debug!(
            collection = self.repository.collection_name(),
            "Releasing user components"
        );
        self.store.close(deadline).await
    }
}

#[cfg(test)]
impl Container {
    /// Container over a client that never reaches a server; store calls fail fast.
    pub(crate) async fn offline() -> Self {
        let client =
            mongodb::Client::with_uri_str("mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=300")
                .await
                .unwrap();
        Self::from_store(MongoStore::from_client(client, "users_test"))
    }
}
