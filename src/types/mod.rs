//! Shared types used across handlers and services.

mod pagination;
mod response;

pub use pagination::PaginationParams;
pub use response::{Created, NoContent};
