//! # IO Module
//!
//! The interface layer between HTTP clients and the domain logic. It
//! translates requests into domain commands and domain results back into
//! JSON responses.
//!
//! ## Supported Operations
//!
//! - **GET /api/todos**: list all todos
//! - **POST /api/todos**: create a todo
//! - **PUT /api/todos/:id**: update title and/or completion
//! - **DELETE /api/todos/:id**: delete a todo

pub mod rest;
