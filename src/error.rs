// Error types for github-verbs.
// Covers transport failures, unexpected HTTP statuses, and JSON decoding.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerbsError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("HTTP {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl VerbsError {
    /// HTTP status carried by this error, if it came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            VerbsError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            VerbsError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            VerbsError::RateLimited { .. } => Some(StatusCode::FORBIDDEN),
            VerbsError::UnexpectedStatus { status, .. } => Some(*status),
            VerbsError::Api(e) => e.status(),
            VerbsError::Json(_) | VerbsError::InvalidHeader(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VerbsError>;
