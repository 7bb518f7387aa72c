//! User service - Handles user-related business logic.
//!
//! Owns every rule between the HTTP surface and the repository: email
//! uniqueness, not-found semantics, the password policy and hashing.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::config::PASSWORD_POLICY_MESSAGE;
use crate::domain::{is_strong, CreateUser, Password, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::types::PaginationParams;

const ENTITY: &str = "User";

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user, returning the generated id
    async fn create_user(&self, input: CreateUser) -> AppResult<String>;

    /// Get user by ID
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// Replace name, surname and email; returns the id
    async fn update_user(&self, id: &str, input: UpdateUser) -> AppResult<String>;

    /// Replace the password after checking it against the strength policy
    async fn update_password(&self, id: &str, password: String) -> AppResult<String>;

    /// Permanently delete a user
    async fn delete_user(&self, id: &str) -> AppResult<()>;

    /// Page through users ordered by id
    async fn list_users(&self, params: PaginationParams) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    async fn find_existing(&self, id: &str) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found(ENTITY)
    }
}

/// Argon2 is deliberately slow, so it runs off the async workers.
async fn hash_password(plain_text: String) -> AppResult<Password> {
    tokio::task::spawn_blocking(move || Password::hash(&plain_text))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))?
}

#[async_trait]
impl UserService for UserManager {
    #[instrument(skip(self, input))]
    async fn create_user(&self, input: CreateUser) -> AppResult<String> {
        // Early exit only; the unique index is what actually guarantees one
        // user per email when two creates race.
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict(ENTITY));
        }

        let password = hash_password(input.password).await?;
        let user = User::new(input.name, input.surname, input.email, password.into_string());
        let id = user.id.clone();

        self.repo.create(user).await?;
        tracing::info!(user_id = %id, "User created");

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_user(&self, id: &str) -> AppResult<User> {
        self.find_existing(id).await
    }

    #[instrument(skip(self, input))]
    async fn update_user(&self, id: &str, input: UpdateUser) -> AppResult<String> {
        let mut user = self.find_existing(id).await?;

        if user.email != input.email {
            if let Some(owner) = self.repo.find_by_email(&input.email).await? {
                if owner.id != user.id {
                    return Err(AppError::conflict(ENTITY));
                }
            }
        }

        user.update_profile(input.name, input.surname, input.email);
        self.repo.update(user).await?;
        tracing::info!(user_id = %id, "User updated");

        Ok(id.to_owned())
    }

    #[instrument(skip(self, password))]
    async fn update_password(&self, id: &str, password: String) -> AppResult<String> {
        if !is_strong(&password) {
            return Err(AppError::validation(PASSWORD_POLICY_MESSAGE));
        }

        let mut user = self.find_existing(id).await?;
        let hash = hash_password(password).await?;

        user.update_password(hash.into_string());
        self.repo.update(user).await?;
        tracing::info!(user_id = %id, "User password updated");

        Ok(id.to_owned())
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.find_existing(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_users(&self, params: PaginationParams) -> AppResult<Vec<User>> {
        let (limit, offset) = params.resolve()?;
        self.repo.find_many(limit, offset).await
    }
}
