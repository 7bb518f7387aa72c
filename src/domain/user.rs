//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    /// Stored password hash, never the plain text.
    pub password: String,
}

impl User {
    /// Create a new user with a freshly generated id
    pub fn new(name: String, surname: String, email: String, password: String) -> Self {
        Self {
            id: Self::generate_id(),
            name,
            surname,
            email,
            password,
        }
    }

    /// Generate an opaque, globally unique user id
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Replace the profile fields, leaving id and password untouched
    pub fn update_profile(&mut self, name: String, surname: String, email: String) {
        self.name = name;
        self.surname = surname;
        self.email = email;
    }

    /// Replace the stored password hash
    pub fn update_password(&mut self, password_hash: String) {
        self.password = password_hash;
    }
}

/// User creation data
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

/// User profile update data
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "9b2f4c1e-6f3a-4e8e-a0b7-3c1d2e4f5a6b")]
    pub id: String,
    /// First name
    #[schema(example = "Jane")]
    pub name: String,
    /// Last name
    #[schema(example = "Doe")]
    pub surname: String,
    /// User email address
    #[schema(example = "jane@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
            email: user.email,
        }
    }
}

/// Identifier of the user affected by a write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserIdResponse {
    #[schema(example = "9b2f4c1e-6f3a-4e8e-a0b7-3c1d2e4f5a6b")]
    pub id: String,
}

impl From<String> for UserIdResponse {
    fn from(id: String) -> Self {
        Self { id }
    }
}
