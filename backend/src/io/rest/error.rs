//! Translation of domain failures into JSON error responses.

use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::error;

use crate::domain::{models::todo::TodoValidationError, TodoError};

/// An error response ready to be sent to the client
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn invalid(err: TodoValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::new(err.to_string()),
        }
    }

    pub fn invalid_with_detail(err: TodoValidationError, detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::with_detail(err.to_string(), detail),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorResponse::new("not found"),
        }
    }

    /// Map a domain error, replacing store failures with `failure_message`
    ///
    /// The store error is logged but never sent to the client.
    pub fn from_todo_error(err: TodoError, failure_message: &str) -> Self {
        match err {
            TodoError::InvalidInput(validation) => Self::invalid(validation),
            TodoError::NotFound => Self::not_found(),
            TodoError::Store(source) => {
                error!("{}: {:?}", failure_message, source);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: ErrorResponse::new(failure_message),
                }
            }
        }
    }

    pub fn from_body_rejection(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                body: ErrorResponse::new("request body too large"),
            }
        } else {
            Self::invalid_with_detail(TodoValidationError::MalformedBody, rejection.body_text())
        }
    }

    /// Any id segment axum cannot extract is reported like an unparseable id
    pub fn from_path_rejection(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected id segment: {}", rejection.body_text());
        Self::invalid(TodoValidationError::InvalidId)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
