use keteai_llm_api::LlmError;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

const QUOTA_MESSAGE: &str = "Quota ou limite atteinte. Réessayez dans quelques minutes ou consultez https://ai.google.dev/gemini-api/docs/rate-limits";
const INVALID_KEY_MESSAGE: &str = "Clé API invalide ou révoquée. Créez une nouvelle clé sur https://aistudio.google.com/apikey et configurez GEMINI_API_KEY.";

/// Failure of one chat turn
#[derive(Debug, Error)]
pub enum ChatError {
    /// Any failure reported by the remote model, whatever its cause
    #[error(transparent)]
    RemoteCall(#[from] LlmError),
}

impl ChatError {
    /// Text shown to the user on the single error line.
    ///
    /// Quota and bad-key failures get an actionable hint; everything else is
    /// shown as reported.
    pub fn user_message(&self) -> String {
        static QUOTA: OnceLock<Option<Regex>> = OnceLock::new();
        static INVALID_KEY: OnceLock<Option<Regex>> = OnceLock::new();

        let raw = self.to_string();
        if is_match(&QUOTA, r"(?i)quota|limit: 0|billing|rate.limit|retry in", &raw) {
            QUOTA_MESSAGE.to_string()
        } else if is_match(&INVALID_KEY, r"(?i)leaked|invalid.*key|API key", &raw) {
            INVALID_KEY_MESSAGE.to_string()
        } else {
            raw
        }
    }
}

fn is_match(cell: &OnceLock<Option<Regex>>, pattern: &str, text: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}
