use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
///
/// The only capability the service depends on. The MongoDB adapter, mocks and
/// in-memory doubles all implement it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user. An absent or empty id lets the store assign one.
    async fn create(&self, user: &User) -> UserResult<()>;
}
