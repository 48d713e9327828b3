//! Users Domain
//!
//! Creating user records in MongoDB behind a layered API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /users
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules seam
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Capability trait + MongoDB implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User entity
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_users::{MongoUserRepository, UserHandler, UserService, handlers};
//!
//! let repository = MongoUserRepository::new(store.database());
//! let service = UserService::new(repository);
//! let handler = UserHandler::new(service);
//!
//! // Mounted under /api by the app
//! let router = handlers::router(handler);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::{ApiDoc, UserHandler};
pub use models::{CreateUserResponse, User};
pub use self::mongodb::MongoUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
