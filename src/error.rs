use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::forms::FieldErrors;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Image upload failed: {0}")]
    Upload(String),

    #[error("{0} is not supported for this resource")]
    Unsupported(&'static str),

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    /// Build an `Api` error from a non-success status and whatever body the server sent.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            return ClientError::Unauthorized;
        }
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error"]
                    .iter()
                    .find_map(|key| value.get(*key).and_then(Value::as_str).map(str::to_owned))
            })
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    "Wrong Services".to_string()
                } else {
                    body.trim().to_string()
                }
            });
        ClientError::Api { status, message }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
