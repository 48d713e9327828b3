//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;

/// User service providing business logic operations
///
/// Currently forwards to the repository untouched; business rules (dedup,
/// validation) would go here.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    /// Create a service over a repository that is also held elsewhere
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user
    #[instrument(skip(self, user), fields(user_email = %user.email))]
    pub async fn create_user(&self, user: &User) -> UserResult<()> {
        self.repository.create(user).await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::repository::MockUserRepository;
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_create_user_forwards_unchanged() {
        let user = User::new("A", "a@x").with_id("u-1");
        let expected = user.clone();

        let mut mock = MockUserRepository::new();
        mock.expect_create()
            .with(eq(expected))
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(mock);
        service.create_user(&user).await.unwrap();

        assert_eq!(user, User::new("A", "a@x").with_id("u-1"));
    }

    #[tokio::test]
    async fn test_create_user_propagates_repository_error() {
        let mut mock = MockUserRepository::new();
        mock.expect_create()
            .times(1)
            .returning(|_| Err(UserError::Database("duplicate key".to_string())));

        let service = UserService::new(mock);
        let result = service.create_user(&User::new("A", "a@x")).await;

        assert!(matches!(result, Err(UserError::Database(msg)) if msg == "duplicate key"));
    }
}
