//! # Storage Module
//!
//! Handles all data persistence for the todo service.
//!
//! The domain layer only sees the [`TodoStorage`] trait. The single backing
//! implementation is [`TodoRepository`], which runs parameterized SQLite
//! statements over the pool owned by [`DbConnection`].
//!
//! ## Key Responsibilities
//!
//! - **Connection Management**: opening the pool, creating the database file
//!   and schema at startup, closing the pool on shutdown
//! - **Data Access**: one atomic statement per operation
//! - **Row Mapping**: turning SQLite rows into domain [`Todo`](crate::domain::models::todo::Todo) values

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::TodoRepository;
pub use traits::TodoStorage;
