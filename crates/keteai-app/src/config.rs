use anyhow::{Context, Result};
use std::env;

use crate::cli::Cli;
use keteai_llm_api::{ClientConfig, PERSONA_INSTRUCTION};

/// Set up the client configuration from CLI arguments and environment
pub fn setup_from_cli(cli: &Cli) -> Result<ClientConfig> {
    let api_key = resolve_api_key(cli.api_key.clone(), env::var("GOOGLE_API_KEY").ok())
        .context("Clé API manquante. Définissez GEMINI_API_KEY (https://aistudio.google.com/apikey) ou passez --api-key")?;

    Ok(ClientConfig {
        api_key,
        model: cli.model.clone(),
        fallback_model: cli.fallback_model.clone().filter(|m| !m.trim().is_empty()),
        api_url: cli.api_url.clone(),
        system_instruction: cli.persona.then(|| PERSONA_INSTRUCTION.to_string()),
        verbose: cli.verbose,
    })
}

/// Precedence: --api-key / GEMINI_API_KEY, then GOOGLE_API_KEY. Blank values count as unset.
pub fn resolve_api_key(primary: Option<String>, google_key: Option<String>) -> Option<String> {
    primary
        .filter(|key| !key.trim().is_empty())
        .or(google_key.filter(|key| !key.trim().is_empty()))
        .map(|key| key.trim().to_string())
}
