//! Request body and path validation.
//!
//! Bodies are parsed as loose JSON first so that each field gets its own
//! error message instead of a generic deserializer failure.

use serde_json::{Map, Value};

use super::error::ApiError;
use crate::domain::commands::{CreateTodoCommand, UpdateTodoCommand};
use crate::domain::models::todo::{parse_todo_id, TodoTitle, TodoValidationError};

pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    parse_todo_id(raw).map_err(ApiError::invalid)
}

pub fn parse_create_body(body: &[u8]) -> Result<CreateTodoCommand, ApiError> {
    let fields = parse_object(body)?;

    let title = match fields.get("title") {
        None | Some(Value::Null) => return Err(ApiError::invalid(TodoValidationError::EmptyTitle)),
        Some(value) => parse_title(value)?,
    };

    Ok(CreateTodoCommand { title })
}

/// Absent and `null` fields both mean "leave unchanged"
pub fn parse_update_body(id: i64, body: &[u8]) -> Result<UpdateTodoCommand, ApiError> {
    let fields = parse_object(body)?;

    let title = match fields.get("title") {
        None | Some(Value::Null) => None,
        Some(value) => Some(parse_title(value)?),
    };

    let completed = match fields.get("completed") {
        None | Some(Value::Null) => None,
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => return Err(ApiError::invalid(TodoValidationError::CompletedNotBoolean)),
    };

    Ok(UpdateTodoCommand {
        id,
        title,
        completed,
    })
}

fn parse_title(value: &Value) -> Result<TodoTitle, ApiError> {
    match value {
        Value::String(raw) => TodoTitle::parse(raw).map_err(ApiError::invalid),
        _ => Err(ApiError::invalid(TodoValidationError::TitleNotString)),
    }
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(ApiError::invalid(TodoValidationError::BodyNotObject)),
        Err(e) => Err(ApiError::invalid_with_detail(
            TodoValidationError::MalformedBody,
            e.to_string(),
        )),
    }
}
