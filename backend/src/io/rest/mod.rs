//! # REST API Interface Layer
//!
//! Provides the HTTP endpoints of the todo service. This layer handles:
//! - JSON request parsing and field validation
//! - Error translation from domain failures to HTTP status codes
//! - Mapping domain todos to the shared wire types
//!
//! It holds no business rules of its own; everything past validation is
//! delegated to [`TodoService`](crate::domain::TodoService).

use axum::Router;

use crate::AppState;

pub mod error;
pub mod mappers;
pub mod not_found;
pub mod todo_apis;
pub mod validation;

pub use error::ApiError;

/// Routes mounted under `/api`; unknown paths answer with a JSON 404
pub fn router() -> Router<AppState> {
    todo_apis::router().fallback(not_found::api_not_found)
}
