//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{UserIdResponse, UserResponse};

/// OpenAPI documentation for the user management API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "0.1.0",
        description = "Create, read, update, delete and page through user accounts",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::update_password,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserResponse,
            UserIdResponse,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            user_handler::UpdatePasswordRequest,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
