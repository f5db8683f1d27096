//! # Todo Backend
//!
//! A small CRUD service for todo items, stored in SQLite and served as
//! HTTP/JSON.
//!
//! ## Architecture
//!
//! ```text
//! Browser / API client
//!     ↓
//! IO Layer (REST router, validation, error mapping)
//!     ↓
//! Domain Layer (TodoService, commands, title rules)
//!     ↓
//! Storage Layer (TodoStorage trait, SQLite repository)
//! ```
//!
//! [`initialize_backend`] opens the store and wires the services together;
//! [`create_router`] builds the axum application around the resulting
//! [`AppState`].

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get_service,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tracing::info;

use crate::config::Config;
use crate::domain::TodoService;
use crate::storage::{DbConnection, TodoRepository};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub todo_service: TodoService,
    /// Kept so the pool can be closed on shutdown
    pub db: DbConnection,
}

/// Open the database and build the services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    Ok(build_state(db))
}

/// Backend over a fresh in-memory database
#[cfg(test)]
pub async fn initialize_test_backend() -> Result<AppState> {
    let db = DbConnection::init_test().await?;
    Ok(build_state(db))
}

fn build_state(db: DbConnection) -> AppState {
    let repository = TodoRepository::new(db.clone());
    let todo_service = TodoService::new(Arc::new(repository));
    AppState { todo_service, db }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &Config) -> Result<Router> {
    let index = get_service(ServeFile::new(config.index_file()))
        .fallback(io::rest::not_found::not_found);

    let router = Router::new()
        .route("/", index)
        .nest("/api", io::rest::router())
        .fallback(io::rest::not_found::not_found)
        .with_state(app_state);

    let router = match &config.cors_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("CORS_ORIGIN is not a valid header value: {origin}"))?;
            let cors = CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers(Any);
            router.layer(cors)
        }
        None => router,
    };

    Ok(router)
}
