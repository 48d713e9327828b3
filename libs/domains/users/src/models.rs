use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned alongside a newly created user.
pub const USER_CREATED: &str = "Usuario creado correctamente";

/// User record as exchanged over HTTP.
///
/// Missing `name` or `email` fields decode as empty strings; only
/// well-formed JSON is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct User {
    /// Store-assigned when absent or empty
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "65f1c0ffee0000000000beef")]
    pub id: Option<String>,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Body of `201 Created` for `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: User,
}

impl CreateUserResponse {
    pub fn created(user: User) -> Self {
        Self {
            message: USER_CREATED.to_string(),
            user,
        }
    }
}
