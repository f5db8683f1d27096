/// Longest title we keep, counted in characters
pub const MAX_TITLE_CHARS: usize = 200;

/// A stored todo item
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
}

/// A title that has been normalized and is known to be non-empty
///
/// Normalization trims surrounding whitespace, replaces every run of
/// `\r`/`\n` with a single space and truncates to [`MAX_TITLE_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn parse(raw: &str) -> Result<Self, TodoValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }

        let mut title = String::with_capacity(trimmed.len());
        let mut in_line_break = false;
        for c in trimmed.chars() {
            if c == '\r' || c == '\n' {
                if !in_line_break {
                    title.push(' ');
                }
                in_line_break = true;
            } else {
                title.push(c);
                in_line_break = false;
            }
        }

        let title = match title.char_indices().nth(MAX_TITLE_CHARS) {
            Some((cut, _)) => title[..cut].to_string(),
            None => title,
        };

        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse a path segment into a todo id
pub fn parse_todo_id(raw: &str) -> Result<i64, TodoValidationError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TodoValidationError::InvalidId),
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TodoValidationError {
    #[error("title is required")]
    EmptyTitle,
    #[error("title must be a string")]
    TitleNotString,
    #[error("completed must be a boolean")]
    CompletedNotBoolean,
    #[error("no fields to update")]
    NoFieldsToUpdate,
    #[error("invalid id")]
    InvalidId,
    #[error("invalid JSON body")]
    MalformedBody,
    #[error("request body must be a JSON object")]
    BodyNotObject,
}
