use serde_json::Value;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No response was received at all (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A response was received with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    /// A 2xx response whose body did not parse as the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The credential store failed while reading the token.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Maximum length for error response bodies carried in error values
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid carrying excessive data around.
    /// Error bodies are arbitrary server output (localized HTML pages
    /// included), so the cut must land on a char boundary.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut cut = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..cut],
            body.len()
        )
    }

    pub fn server(status: reqwest::StatusCode, body: &str) -> Self {
        ApiError::Server {
            status: status.as_u16(),
            body: Self::truncate_body(body),
        }
    }

    /// The HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull the server-supplied `message` field out of an error body, if any.
/// Error bodies are JSON objects like `{"message": "class code expired"}`
/// when the backend has something to say.
pub fn body_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_long_bodies() {
        let long_body = "x".repeat(2000);
        let err = ApiError::server(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &long_body);
        match err {
            ApiError::Server { status, body } => {
                assert_eq!(status, 500);
                assert!(body.len() < 600);
                assert!(body.contains("truncated"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        // A two-byte character straddling the cut point must not split
        let mut body = "x".repeat(MAX_ERROR_BODY_LENGTH - 1);
        body.push('é');
        body.push_str(&"y".repeat(100));

        let err = ApiError::server(reqwest::StatusCode::BAD_GATEWAY, &body);
        match err {
            ApiError::Server { status, body } => {
                assert_eq!(status, 502);
                assert!(body.starts_with("x"));
                assert!(!body.contains('é'));
                assert!(body.contains("truncated"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_body_message_extraction() {
        assert_eq!(
            body_message(r#"{"message": "class code expired"}"#),
            Some("class code expired".to_string())
        );
        assert_eq!(body_message(r#"{"message": ""}"#), None);
        assert_eq!(body_message(r#"{"error": "nope"}"#), None);
        assert_eq!(body_message("<html>502</html>"), None);
    }
}
