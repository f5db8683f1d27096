use super::models::todo::TodoValidationError;

/// Failure of a todo operation
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error(transparent)]
    InvalidInput(#[from] TodoValidationError),
    #[error("not found")]
    NotFound,
    /// The store was unreachable or a statement failed
    #[error("storage failure: {0}")]
    Store(#[from] anyhow::Error),
}
