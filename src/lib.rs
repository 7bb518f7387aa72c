//! User Management - HTTP service for user accounts
//!
//! Creates, reads, updates, deletes and pages through user records stored
//! in PostgreSQL, with Argon2 password hashing and request validation.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity, projections and password policy
//! - **services**: Business rules (conflicts, not-found, hashing)
//! - **infra**: Database pool, migrations and the user repository
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Password, User};
pub use errors::{AppError, AppResult};
