//! # Wish List Errors
//!
//! Error types shared by the collection manager and the HTTP adapter.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type for wish list operations
pub type WishResult<T> = Result<T, WishError>;

/// Wish list errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WishError {
    /// Malformed input: undecodable body or non-numeric path id
    #[error("{0}")]
    BadRequest(String),

    /// No wish carries the requested id
    #[error("ID not found: {0}")]
    NotFound(u64),
}

impl WishError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WishError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WishError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<serde_json::Error> for WishError {
    fn from(err: serde_json::Error) -> Self {
        WishError::BadRequest(err.to_string())
    }
}

impl From<std::num::ParseIntError> for WishError {
    fn from(err: std::num::ParseIntError) -> Self {
        WishError::BadRequest(err.to_string())
    }
}

/// Errors go back to the caller as a plain-text body.
impl IntoResponse for WishError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, self.to_string()).into_response()
    }
}
