//! # REST API for Todo Management
//!
//! Endpoints for listing, creating, updating and deleting todos.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        DefaultBodyLimit, Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use shared::DeleteTodoResponse;
use tracing::info;

use super::error::ApiError;
use super::mappers::todo_mapper::TodoMapper;
use super::not_found::api_not_found;
use super::validation;
use crate::domain::commands::DeleteTodoCommand;
use crate::AppState;

/// Largest request body accepted on write endpoints
pub const MAX_BODY_BYTES: usize = 1_000_000;

/// Create a router for todo related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            get(list_todos).post(create_todo).fallback(api_not_found),
        )
        .route(
            "/todos/:id",
            put(update_todo).delete(delete_todo).fallback(api_not_found),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// List all todos ordered by id ascending
pub async fn list_todos(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/todos");

    let todos = state
        .todo_service
        .list_todos()
        .await
        .map_err(|e| ApiError::from_todo_error(e, "Failed to load todos"))?;

    Ok((StatusCode::OK, Json(TodoMapper::to_dto_list(todos))))
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/todos");

    let body = body.map_err(ApiError::from_body_rejection)?;
    let command = validation::parse_create_body(&body)?;

    let todo = state
        .todo_service
        .create_todo(command)
        .await
        .map_err(|e| ApiError::from_todo_error(e, "Failed to create todo"))?;

    Ok((StatusCode::CREATED, Json(TodoMapper::to_dto(todo))))
}

/// Update the title and/or completion flag of a todo
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(ApiError::from_path_rejection)?;
    info!("PUT /api/todos/{}", id);

    let id = validation::parse_id(&id)?;
    let body = body.map_err(ApiError::from_body_rejection)?;
    let command = validation::parse_update_body(id, &body)?;

    let todo = state
        .todo_service
        .update_todo(command)
        .await
        .map_err(|e| ApiError::from_todo_error(e, "Failed to update todo"))?;

    Ok((StatusCode::OK, Json(TodoMapper::to_dto(todo))))
}

/// Delete a todo
pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(ApiError::from_path_rejection)?;
    info!("DELETE /api/todos/{}", id);

    let id = validation::parse_id(&id)?;

    state
        .todo_service
        .delete_todo(DeleteTodoCommand { id })
        .await
        .map_err(|e| ApiError::from_todo_error(e, "Failed to delete todo"))?;

    Ok((StatusCode::OK, Json(DeleteTodoResponse { ok: true })))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::domain::models::todo::{Todo, TodoTitle};
    use crate::domain::TodoService;
    use crate::storage::{DbConnection, TodoStorage};
    use crate::{create_router, initialize_test_backend, AppState};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use shared::{
        CreateTodoRequest, DeleteTodoResponse, ErrorResponse, Todo as TodoDto, UpdateTodoRequest,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn setup_test_app() -> Router {
        let app_state = initialize_test_backend().await.expect("Failed to create test backend");
        create_router(app_state, &Config::default()).expect("Failed to build router")
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> Result<(StatusCode, Vec<u8>), Box<dyn std::error::Error>> {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json))?,
            None => request.body(Body::empty())?,
        };

        let response = app.clone().oneshot(request).await?;
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, body.to_vec()))
    }

    async fn create(app: &Router, title: &str) -> Result<TodoDto, Box<dyn std::error::Error>> {
        let request = CreateTodoRequest {
            title: title.to_string(),
        };
        let (status, body) = send(
            app,
            Method::POST,
            "/api/todos",
            Some(serde_json::to_string(&request)?),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
        Ok(serde_json::from_slice(&body)?)
    }

    async fn list(app: &Router) -> Result<Vec<TodoDto>, Box<dyn std::error::Error>> {
        let (status, body) = send(app, Method::GET, "/api/todos", None).await?;
        assert_eq!(status, StatusCode::OK);
        Ok(serde_json::from_slice(&body)?)
    }

    #[tokio::test]
    async fn test_create_todo() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;

        let todo = create(&app, "Buy milk").await?;

        assert!(todo.id > 0);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert!(!todo.created_at.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_returns_todos_in_id_order() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;
        assert!(list(&app).await?.is_empty());

        let first = create(&app, "first").await?;
        let second = create(&app, "second").await?;
        assert_ne!(first.id, second.id);

        let todos = list(&app).await?;
        assert_eq!(todos, vec![first, second]);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_completed() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;
        let todo = create(&app, "Walk dog").await?;

        let request = UpdateTodoRequest {
            title: None,
            completed: Some(true),
        };
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/todos/{}", todo.id),
            Some(serde_json::to_string(&request)?),
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        let updated: TodoDto = serde_json::from_slice(&body)?;
        assert!(updated.completed);
        assert_eq!(updated.title, "Walk dog");
        assert_eq!(updated.created_at, todo.created_at);

        let todos = list(&app).await?;
        assert!(todos[0].completed);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_title() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;
        let todo = create(&app, "draft").await?;

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/todos/{}", todo.id),
            Some(r#"{"title":"  final\nversion  "}"#.to_string()),
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        let updated: TodoDto = serde_json::from_slice(&body)?;
        assert_eq!(updated.title, "final version");
        assert!(!updated.completed);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_todo() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;
        let existing = create(&app, "untouched").await?;

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/todos/{}", existing.id + 1000),
            Some(r#"{"title":"hijack","completed":true}"#.to_string()),
        )
        .await?;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_slice(&body)?;
        assert_eq!(error.error, "not found");
        assert_eq!(list(&app).await?, vec![existing]);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_validation_errors() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;
        let todo = create(&app, "validate me").await?;
        let uri = format!("/api/todos/{}", todo.id);

        let cases = [
            ("{}", "no fields to update"),
            (r#"{"completed":"yes"}"#, "completed must be a boolean"),
            (r#"{"title":"   "}"#, "title is required"),
            ("not json", "invalid JSON body"),
        ];
        for (body, expected) in cases {
            let (status, response) = send(&app, Method::PUT, &uri, Some(body.to_string())).await?;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            let error: ErrorResponse = serde_json::from_slice(&response)?;
            assert_eq!(error.error, expected);
        }

        let (status, _) =
            send(&app, Method::PUT, "/api/todos/abc", Some(r#"{"completed":true}"#.to_string()))
                .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(list(&app).await?, vec![todo]);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_todo_twice() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;
        let todo = create(&app, "temporary").await?;
        let uri = format!("/api/todos/{}", todo.id);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await?;
        assert_eq!(status, StatusCode::OK);
        let ack: DeleteTodoResponse = serde_json::from_slice(&body)?;
        assert!(ack.ok);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_slice(&body)?;
        assert_eq!(error.error, "not found");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_invalid_id() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;

        for uri in ["/api/todos/0", "/api/todos/-1", "/api/todos/one"] {
            let (status, body) = send(&app, Method::DELETE, uri, None).await?;
            assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
            let error: ErrorResponse = serde_json::from_slice(&body)?;
            assert_eq!(error.error, "invalid id");
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_non_utf8_id_is_invalid_id() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;
        let existing = create(&app, "still here").await?;

        let cases = [
            (Method::DELETE, None),
            (Method::PUT, Some(r#"{"completed":true}"#.to_string())),
        ];
        for (method, body) in cases {
            let (status, response) = send(&app, method.clone(), "/api/todos/%FF", body).await?;
            assert_eq!(status, StatusCode::BAD_REQUEST, "method: {}", method);
            let error: ErrorResponse = serde_json::from_slice(&response)?;
            assert_eq!(error.error, "invalid id");
        }

        assert_eq!(list(&app).await?, vec![existing]);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_blank_title_creates_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;

        for body in [r#"{"title":"   "}"#, r#"{}"#, ""] {
            let (status, response) = send(&app, Method::POST, "/api/todos", Some(body.to_string())).await?;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            let error: ErrorResponse = serde_json::from_slice(&response)?;
            assert_eq!(error.error, "title is required");
        }

        assert!(list(&app).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_sql_metacharacters_have_no_side_effects() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;
        let bystander = create(&app, "bystander").await?;

        let crafted = "x'); DELETE FROM todos; INSERT INTO todos (title) VALUES ('pwned";
        let stored = create(&app, crafted).await?;
        assert_eq!(stored.title, crafted);

        let quoted = create(&app, "it's \\' \"fine\"\nreally").await?;
        assert_eq!(quoted.title, "it's \\' \"fine\" really");

        let todos = list(&app).await?;
        assert_eq!(todos, vec![bystander, stored, quoted]);
        Ok(())
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let app = setup_test_app().await;

        let huge = format!(r#"{{"title":"{}"}}"#, "a".repeat(super::MAX_BODY_BYTES + 1));
        let (status, body) = send(&app, Method::POST, "/api/todos", Some(huge)).await?;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        let error: ErrorResponse = serde_json::from_slice(&body)?;
        assert_eq!(error.error, "request body too large");
        assert!(list(&app).await?.is_empty());
        Ok(())
    }

    struct FailingStorage;

    #[async_trait]
    impl TodoStorage for FailingStorage {
        async fn list_todos(&self) -> anyhow::Result<Vec<Todo>> {
            Err(anyhow::anyhow!("disk I/O error at /var/db/todo.db"))
        }

        async fn create_todo(&self, _title: &TodoTitle) -> anyhow::Result<Todo> {
            Err(anyhow::anyhow!("database is locked"))
        }

        async fn update_todo(
            &self,
            _id: i64,
            _title: Option<&TodoTitle>,
            _completed: Option<bool>,
        ) -> anyhow::Result<Option<Todo>> {
            Err(anyhow::anyhow!("database is locked"))
        }

        async fn delete_todo(&self, _id: i64) -> anyhow::Result<bool> {
            Err(anyhow::anyhow!("database is locked"))
        }
    }

    #[tokio::test]
    async fn test_store_failures_return_safe_messages() -> Result<(), Box<dyn std::error::Error>> {
        let db = DbConnection::init_test().await?;
        let app_state = AppState {
            todo_service: TodoService::new(Arc::new(FailingStorage)),
            db,
        };
        let app = create_router(app_state, &Config::default())?;

        let cases = [
            (Method::GET, "/api/todos", None, "Failed to load todos"),
            (Method::POST, "/api/todos", Some(r#"{"title":"a"}"#), "Failed to create todo"),
            (Method::PUT, "/api/todos/1", Some(r#"{"completed":true}"#), "Failed to update todo"),
            (Method::DELETE, "/api/todos/1", None, "Failed to delete todo"),
        ];
        for (method, uri, body, expected) in cases {
            let (status, response) = send(&app, method, uri, body.map(str::to_string)).await?;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            let error: ErrorResponse = serde_json::from_slice(&response)?;
            assert_eq!(error, ErrorResponse::new(expected));
        }
        Ok(())
    }
}
