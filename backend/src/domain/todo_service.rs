use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::{CreateTodoCommand, DeleteTodoCommand, UpdateTodoCommand};
use crate::domain::error::TodoError;
use crate::domain::models::todo::{Todo, TodoValidationError};
use crate::storage::TodoStorage;

/// Service for managing todos
#[derive(Clone)]
pub struct TodoService {
    storage: Arc<dyn TodoStorage>,
}

impl TodoService {
    pub fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    /// List all todos, oldest first
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        let todos = self.storage.list_todos().await?;
        info!("Found {} todos", todos.len());
        Ok(todos)
    }

    /// Create a todo; the store assigns id and created_at
    pub async fn create_todo(&self, command: CreateTodoCommand) -> Result<Todo, TodoError> {
        let todo = self.storage.create_todo(&command.title).await?;
        info!("Created todo with ID: {}", todo.id);
        Ok(todo)
    }

    pub async fn update_todo(&self, command: UpdateTodoCommand) -> Result<Todo, TodoError> {
        if !command.has_changes() {
            return Err(TodoValidationError::NoFieldsToUpdate.into());
        }

        let updated = self
            .storage
            .update_todo(command.id, command.title.as_ref(), command.completed)
            .await?;

        match updated {
            Some(todo) => {
                info!("Updated todo with ID: {}", todo.id);
                Ok(todo)
            }
            None => {
                warn!("Todo not found for update: {}", command.id);
                Err(TodoError::NotFound)
            }
        }
    }

    pub async fn delete_todo(&self, command: DeleteTodoCommand) -> Result<(), TodoError> {
        if self.storage.delete_todo(command.id).await? {
            info!("Deleted todo with ID: {}", command.id);
            Ok(())
        } else {
            warn!("Todo not found for delete: {}", command.id);
            Err(TodoError::NotFound)
        }
    }
}
