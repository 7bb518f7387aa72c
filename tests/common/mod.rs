//! Shared test doubles.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use user_management::domain::User;
use user_management::errors::{AppError, AppResult};
use user_management::infra::UserRepository;
use user_management::services::UserManager;

/// In-memory repository with the same contract as the SeaORM store:
/// ids ordered ascending, unique email enforced on write.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<String, User>>,
}

impl InMemoryUserRepository {
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, User>> {
        self.users.lock().expect("repository lock poisoned")
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<()> {
        let mut users = self.lock();
        if users.contains_key(&user.id) || users.values().any(|u| u.email == user.email) {
            return Err(AppError::conflict("User"));
        }
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.lock().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.lock().values().find(|u| u.email == email).cloned())
    }

    async fn update(&self, user: User) -> AppResult<()> {
        let mut users = self.lock();
        if users
            .values()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(AppError::conflict("User"));
        }
        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user;
                Ok(())
            }
            None => Err(AppError::not_found("User")),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.lock()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("User"))
    }

    async fn find_many(&self, limit: u64, offset: u64) -> AppResult<Vec<User>> {
        Ok(self
            .lock()
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

pub fn user(id: &str, email: &str) -> User {
    User {
        id: id.to_string(),
        name: format!("name-{}", id),
        surname: format!("surname-{}", id),
        email: email.to_string(),
        password: "stored-hash".to_string(),
    }
}

pub fn manager(repo: Arc<InMemoryUserRepository>) -> UserManager {
    UserManager::new(repo)
}
