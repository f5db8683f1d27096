use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::warn;

use super::error::ApiError;

/// Fallback for anything under `/api` that no endpoint handles
pub async fn api_not_found(method: Method, uri: Uri) -> ApiError {
    warn!("No API route for {} {}", method, uri.path());
    ApiError::not_found()
}

/// Fallback for every other path
///
/// Paths under `/api` that miss the nested router (such as `/api/`) still
/// get the JSON body.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return api_not_found(method, uri).await.into_response();
    }
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}
