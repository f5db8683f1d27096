//! # Storage Traits
//!
//! The domain layer talks to persistence only through [`TodoStorage`], so the
//! service never depends on SQLite directly.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::todo::{Todo, TodoTitle};

/// Trait defining the interface for todo storage operations
///
/// Each method maps to exactly one statement and is atomic on its own.
#[async_trait]
pub trait TodoStorage: Send + Sync {
    /// List every todo ordered by id ascending
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Insert a new, not yet completed todo and return the stored row
    async fn create_todo(&self, title: &TodoTitle) -> Result<Todo>;

    /// Update the supplied fields of a todo
    /// Returns None if no todo has the given id
    async fn update_todo(
        &self,
        id: i64,
        title: Option<&TodoTitle>,
        completed: Option<bool>,
    ) -> Result<Option<Todo>>;

    /// Delete a single todo
    /// Returns true if the todo was found and deleted, false otherwise
    async fn delete_todo(&self, id: i64) -> Result<bool>;
}
