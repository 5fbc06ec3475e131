//! LLM error types

use thiserror::Error;

/// Errors that can occur talking to the generation service
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Unknown LLM provider: '{0}'. Supported: gemini, openai")]
    UnknownProvider(String),
}

impl LlmError {
    /// Whether the service answered but the answer was unusable
    pub fn is_bad_response(&self) -> bool {
        matches!(self, LlmError::InvalidResponse(_) | LlmError::Json(_))
    }

    /// HTTP status if the service returned an error status
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
