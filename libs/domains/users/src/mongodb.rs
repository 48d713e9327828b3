//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;

/// Default collection for user records
pub const USERS_COLLECTION: &str = "users";

/// Stored shape of a user; the id lives under `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "is_unassigned"
    )]
    id: Option<String>,
    name: String,
    email: String,
}

fn is_unassigned(id: &Option<String>) -> bool {
    id.as_deref().is_none_or(str::is_empty)
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Create a repository over the `users` collection of `db`.
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, USERS_COLLECTION)
    }

    /// Create a new MongoUserRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<UserDocument>(collection_name),
        }
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(collection = %self.collection.name()))]
    async fn create(&self, user: &User) -> UserResult<()> {
        let result = self.collection.insert_one(UserDocument::from(user)).await?;
        tracing::debug!(inserted_id = %result.inserted_id, "User inserted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_empty_id_is_left_to_the_store() {
        let doc = bson::to_document(&UserDocument::from(&User::new("A", "a@x").with_id(""))).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("name").unwrap(), "A");
    }

    #[test]
    fn test_absent_id_is_left_to_the_store() {
        let doc = bson::to_document(&UserDocument::from(&User::new("A", "a@x"))).unwrap();
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn test_client_id_maps_to_underscore_id() {
        let doc = bson::to_document(&UserDocument::from(&User::new("A", "a@x").with_id("u-1"))).unwrap();
        assert_eq!(doc.get_str("_id").unwrap(), "u-1");
        assert!(!doc.contains_key("id"));
    }

    #[tokio::test]
    async fn test_collection_name() {
        let client = mongodb::Client::with_uri_str("mongodb://127.0.0.1:9")
            .await
            .unwrap();
        let db = client.database("app");

        assert_eq!(MongoUserRepository::new(&db).collection_name(), "users");
        assert_eq!(
            MongoUserRepository::with_collection(&db, "people").collection_name(),
            "people"
        );
    }
}
