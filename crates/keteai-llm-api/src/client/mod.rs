use async_trait::async_trait;
use keteai_types::Turn;

use crate::error::LlmError;

pub mod fallback;
pub mod gemini;

/// LLM client trait - the boundary between the chat session and the remote model
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Ask for a reply to `message`, given every turn exchanged so far.
    ///
    /// Implementations must not keep their own copy of the history; the
    /// caller owns it and decides what gets recorded.
    async fn generate(&self, history: &[Turn], message: &str) -> Result<String, LlmError>;

    /// Model identifier, used for display and logging
    fn model_name(&self) -> &str;
}
