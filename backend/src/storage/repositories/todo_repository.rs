use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::todo::{Todo, TodoTitle};
use crate::storage::connection::DbConnection;
use crate::storage::traits::TodoStorage;

/// SQLite-backed repository for todo operations
#[derive(Clone)]
pub struct TodoRepository {
    db: DbConnection,
}

impl TodoRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_todo(row: &SqliteRow) -> Result<Todo> {
        Ok(Todo {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            completed: row.try_get("completed")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl TodoStorage for TodoRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, completed, created_at
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_todo).collect()
    }

    async fn create_todo(&self, title: &TodoTitle) -> Result<Todo> {
        let row = sqlx::query(
            r#"
            INSERT INTO todos (title)
            VALUES (?)
            RETURNING id, title, completed, created_at
            "#,
        )
        .bind(title.as_str())
        .fetch_one(self.db.pool())
        .await?;

        Self::row_to_todo(&row)
    }

    async fn update_todo(
        &self,
        id: i64,
        title: Option<&TodoTitle>,
        completed: Option<bool>,
    ) -> Result<Option<Todo>> {
        // NULL binds leave the column untouched
        let row = sqlx::query(
            r#"
            UPDATE todos
            SET title = COALESCE(?, title),
                completed = COALESCE(?, completed)
            WHERE id = ?
            RETURNING id, title, completed, created_at
            "#,
        )
        .bind(title.map(TodoTitle::as_str))
        .bind(completed)
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_todo).transpose()
    }

    async fn delete_todo(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
