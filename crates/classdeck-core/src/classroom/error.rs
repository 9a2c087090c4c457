use thiserror::Error;

use crate::api::{error::body_message, ApiError};
use crate::storage::StorageError;

/// Classified failures of the classroom-join workflow, in the shape the UI
/// presents them.
#[derive(Error, Debug)]
pub enum JoinError {
    #[error("classroom not found; check the class code and try again")]
    NotFound,

    #[error("not authorized to join this classroom")]
    Unauthorized,

    #[error("already enrolled in this classroom")]
    AlreadyEnrolled,

    /// Any other response the server sent back, carrying its own message
    /// when it supplied one.
    #[error("{0}")]
    Server(String),

    #[error("network error: {0}")]
    Network(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl JoinError {
    /// Classify a transport-level failure.
    ///
    /// Priority order is fixed: a recognized status code wins over the
    /// response body's message, which wins over the transport error text.
    pub(crate) fn classify(err: ApiError) -> Self {
        match err {
            ApiError::Server { status: 404, .. } => JoinError::NotFound,
            ApiError::Server {
                status: 401 | 403, ..
            } => JoinError::Unauthorized,
            ApiError::Server { status: 409, .. } => JoinError::AlreadyEnrolled,
            ApiError::Server { status, body } => JoinError::Server(
                body_message(&body).unwrap_or_else(|| format!("server returned status {}", status)),
            ),
            ApiError::Network(e) => JoinError::Network(e.to_string()),
            ApiError::Storage(e) => JoinError::Storage(e),
            other => JoinError::Server(other.to_string()),
        }
    }
}
