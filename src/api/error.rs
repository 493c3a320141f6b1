// src/api/error.rs

use thiserror::Error;

/// Error types for the admin API boundary.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Request failed: {0}")]
    Transport(String), // Store String so results stay Clone-able across events
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Response envelope missing 'data' member")]
    Envelope,
    #[error("Admin API key not set")]
    MissingKey,
}

pub type ApiResult<T> = Result<T, ApiError>;

// Transport and decode failures both originate as reqwest errors; keep the
// distinction based on where the failure happened.
impl ApiError {
    pub fn transport(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
