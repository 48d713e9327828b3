//! Database library providing the MongoDB store client
//!
//! The store client owns a pooled connection to a MongoDB deployment and a
//! handle to one logical database. It is created once at startup (after a
//! liveness probe) and closed once at shutdown.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, MongoStore};
//! use std::time::Duration;
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "testdb");
//! let store = MongoStore::connect(&config).await?;
//! let users = store.database().collection::<Document>("users");
//! store.close(Duration::from_secs(5)).await?;
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
