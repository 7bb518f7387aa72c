//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod password;
pub mod user;

pub use password::{is_strong, Password};
pub use user::{CreateUser, UpdateUser, User, UserIdResponse, UserResponse};
