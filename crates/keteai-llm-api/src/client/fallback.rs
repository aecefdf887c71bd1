use async_trait::async_trait;
use colored::Colorize;
use keteai_types::Turn;
use std::sync::Arc;

use crate::client::LlmClient;
use crate::error::LlmError;

/// Sends to `primary`, and once to `fallback` if that fails.
///
/// When both fail the primary error is returned, since it describes the
/// model the user actually asked for.
pub struct FallbackClient {
    primary: Arc<dyn LlmClient>,
    fallback: Arc<dyn LlmClient>,
}

impl FallbackClient {
    pub fn new(primary: Arc<dyn LlmClient>, fallback: Arc<dyn LlmClient>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl LlmClient for FallbackClient {
    async fn generate(&self, history: &[Turn], message: &str) -> Result<String, LlmError> {
        match self.primary.generate(history, message).await {
            Ok(reply) => Ok(reply),
            Err(primary_err) => {
                eprintln!(
                    "{} {} a échoué, bascule vers {}",
                    "⚠️".yellow(),
                    self.primary.model_name(),
                    self.fallback.model_name()
                );
                self.fallback
                    .generate(history, message)
                    .await
                    .map_err(|_| primary_err)
            }
        }
    }

    fn model_name(&self) -> &str {
        self.primary.model_name()
    }
}
