//! Domain-level command types.
//! The REST layer validates raw request bodies into these; the service only
//! ever sees already-normalized input.

use super::models::todo::TodoTitle;

/// Input for creating a new todo.
#[derive(Debug, Clone)]
pub struct CreateTodoCommand {
    pub title: TodoTitle,
}

/// Input for updating an existing todo. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateTodoCommand {
    pub id: i64,
    pub title: Option<TodoTitle>,
    pub completed: Option<bool>,
}

impl UpdateTodoCommand {
    pub fn has_changes(&self) -> bool {
        self.title.is_some() || self.completed.is_some()
    }
}

/// Input for deleting a todo.
#[derive(Debug, Clone)]
pub struct DeleteTodoCommand {
    pub id: i64,
}
