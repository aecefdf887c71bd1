use chrono::{Local, NaiveDateTime};
use keteai_llm_api::LlmClient;
use keteai_types::Turn;
use std::sync::Arc;

use crate::context::compose_message;
use crate::error::ChatError;

/// A single linear conversation with the remote model.
///
/// History is append-only: a turn pair is recorded only after the model has
/// answered, so a failed request leaves it untouched.
pub struct ChatSession {
    client: Arc<dyn LlmClient>,
    history: Vec<Turn>,
}

impl ChatSession {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Send `message` as-is and record the exchange on success.
    pub async fn send_message(&mut self, message: &str) -> Result<String, ChatError> {
        let reply = self.client.generate(&self.history, message).await?;

        self.history.push(Turn::user(message));
        self.history.push(Turn::model(reply.clone()));
        Ok(reply)
    }

    /// Prefix `input` with the context banner for `at`, then send it.
    pub async fn send_user_input_at(
        &mut self,
        input: &str,
        at: &NaiveDateTime,
    ) -> Result<String, ChatError> {
        let message = compose_message(input, at);
        self.send_message(&message).await
    }

    /// Same as [`send_user_input_at`](Self::send_user_input_at) with the
    /// current local time.
    pub async fn send_user_input(&mut self, input: &str) -> Result<String, ChatError> {
        self.send_user_input_at(input, &Local::now().naive_local())
            .await
    }
}
