//! # Domain Module
//!
//! Business rules for todo management, independent of HTTP and SQL.
//!
//! - [`models::todo`]: the `Todo` entity, title normalization and id parsing
//! - [`commands`]: validated inputs handed to the service
//! - [`TodoService`]: create/list/update/delete on top of a [`TodoStorage`](crate::storage::TodoStorage)
//! - [`TodoError`]: the failure taxonomy the REST layer maps to status codes

pub mod commands;
pub mod error;
pub mod models;
pub mod todo_service;

pub use error::TodoError;
pub use todo_service::TodoService;
