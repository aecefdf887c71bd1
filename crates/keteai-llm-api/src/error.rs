use thiserror::Error;

/// Anything that can go wrong while asking the model for a reply
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status; `message` is the API's own error text when it sent one
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("invalid API response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid Gemini response: no candidate text")]
    EmptyResponse,
}

impl LlmError {
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::Api { status, .. } => Some(*status),
            LlmError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
