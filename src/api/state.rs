//! Application state shared by all handlers.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state containing the injected services.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Wire the SeaORM-backed repository and service onto a connected pool.
    pub fn from_database(database: &Database) -> Self {
        let repo = Arc::new(UserStore::new(database.get_connection()));
        Self::new(Arc::new(UserManager::new(repo)))
    }
}
