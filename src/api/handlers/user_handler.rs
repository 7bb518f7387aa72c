//! User handlers.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Json,
    routing::{get, patch},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateUser, UpdateUser, UserIdResponse, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, NoContent, PaginationParams};

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// First name; absent or null is stored as empty
    #[schema(example = "Jane")]
    pub name: Option<String>,
    /// Last name; absent or null is stored as empty
    #[schema(example = "Doe")]
    pub surname: Option<String>,
    /// User email address
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// Initial password
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "1Password.")]
    pub password: String,
}

/// User profile update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// First name; absent or null is stored as empty
    #[schema(example = "Jane")]
    pub name: Option<String>,
    /// Last name; absent or null is stored as empty
    #[schema(example = "Doe")]
    pub surname: Option<String>,
    /// User email address
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
}

/// Password change request; strength is checked by the user service
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordRequest {
    /// New password
    #[schema(example = "1Password.", min_length = 8)]
    pub password: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/:id/password", patch(update_password))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserIdResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "User already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserIdResponse>> {
    let id = state
        .user_service
        .create_user(CreateUser {
            name: payload.name.unwrap_or_default(),
            surname: payload.surname.unwrap_or_default(),
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok(Created(UserIdResponse::from(id)))
}

/// List users ordered by id
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of users", body = Vec<UserResponse>),
        (status = 400, description = "Invalid pagination parameters")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let Query(params) = params.map_err(|e| AppError::validation(e.body_text()))?;
    let users = state.user_service.list_users(params).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Update user profile
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserIdResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email belongs to another user")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserIdResponse>> {
    let id = state
        .user_service
        .update_user(
            &id,
            UpdateUser {
                name: payload.name.unwrap_or_default(),
                surname: payload.surname.unwrap_or_default(),
                email: payload.email,
            },
        )
        .await?;

    Ok(Json(UserIdResponse::from(id)))
}

/// Change user password
#[utoipa::path(
    patch,
    path = "/users/{id}/password",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = UserIdResponse),
        (status = 400, description = "Password does not meet the strength policy"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdatePasswordRequest>,
) -> AppResult<Json<UserIdResponse>> {
    let id = state
        .user_service
        .update_password(&id, payload.password)
        .await?;

    Ok(Json(UserIdResponse::from(id)))
}

/// Delete user permanently
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<NoContent> {
    state.user_service.delete_user(&id).await?;
    Ok(NoContent)
}
