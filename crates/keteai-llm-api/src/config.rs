use std::sync::Arc;

use keteai_types::DEFAULT_MODEL;

use crate::client::{fallback::FallbackClient, gemini::GeminiClient, LlmClient};

/// Default Gemini API base URL
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Student-assistant persona, sent as a system instruction when enabled
pub const PERSONA_INSTRUCTION: &str = "Tu es KeTeaAI, un assistant étudiant expert. \
Réponds de façon claire, encourageante et structure tes réponses avec des puces si nécessaire.";

/// Everything needed to reach the model
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub model: String,
    pub fallback_model: Option<String>,
    pub api_url: String,
    pub system_instruction: Option<String>,
    pub verbose: bool,
}

impl ClientConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            fallback_model: None,
            api_url: GEMINI_API_URL.to_string(),
            system_instruction: None,
            verbose: false,
        }
    }
}

/// Client factory for creating LLM clients
pub struct ClientFactory;

impl ClientFactory {
    /// Build the client described by `config`.
    ///
    /// Returns a plain [`GeminiClient`] unless a distinct fallback model is
    /// configured, in which case both are wrapped in a [`FallbackClient`].
    pub fn create(config: &ClientConfig) -> Arc<dyn LlmClient> {
        let primary = Arc::new(Self::gemini(config, &config.model));

        match config.fallback_model.as_deref() {
            Some(fallback) if fallback != config.model => {
                let fallback = Arc::new(Self::gemini(config, fallback));
                Arc::new(FallbackClient::new(primary, fallback))
            }
            _ => primary,
        }
    }

    fn gemini(config: &ClientConfig, model: &str) -> GeminiClient {
        GeminiClient::new(config.api_key.clone(), model.to_string(), config.api_url.clone())
            .with_system_instruction(config.system_instruction.clone())
            .with_verbose(config.verbose)
    }
}
