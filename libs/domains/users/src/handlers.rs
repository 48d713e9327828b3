use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use axum_helpers::{
    JsonBody, JsonBodyRejection,
    errors::responses::{BadRequestJsonResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUserResponse, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user),
    components(
        schemas(User, CreateUserResponse),
        responses(BadRequestJsonResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Users", description = "User management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// HTTP adapter over the user service.
pub struct UserHandler<R: UserRepository> {
    service: Arc<UserService<R>>,
}

impl<R: UserRepository> UserHandler<R> {
    pub fn new(service: UserService<R>) -> Self {
        Self::from_shared(Arc::new(service))
    }

    pub fn from_shared(service: Arc<UserService<R>>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &UserService<R> {
        &self.service
    }
}

impl<R: UserRepository> Clone for UserHandler<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Create the users router. Mounted under `/api` by the app.
pub fn router<R: UserRepository + 'static>(handler: UserHandler<R>) -> Router {
    Router::new()
        .route("/users", post(create_user))
        .with_state(handler)
}

/// Create a new user
///
/// The body must be sent as `application/json`; anything else is rejected
/// like malformed JSON.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created successfully", body = CreateUserResponse),
        (status = 400, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(handler): State<UserHandler<R>>,
    payload: Result<JsonBody<User>, JsonBodyRejection>,
) -> UserResult<impl IntoResponse> {
    let JsonBody(user) = payload.map_err(|rejection| {
        tracing::debug!(reason = rejection.reason(), "Rejected user payload");
        UserError::InvalidJson
    })?;

    handler.service.create_user(&user).await?;

    Ok((StatusCode::CREATED, Json(CreateUserResponse::created(user))))
}
