use async_trait::async_trait;
use keteai_logging::{log_request, log_response};
use keteai_types::Turn;
use serde::{Deserialize, Serialize};

use crate::client::LlmClient;
use crate::error::LlmError;

/// Google Gemini client using the `generateContent` endpoint
pub struct GeminiClient {
    api_key: String,
    model: String,
    api_url: String,
    system_instruction: Option<String>,
    verbose: bool,
    client: reqwest::Client,
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, api_url: String) -> Self {
        let api_url = api_url.trim_end_matches('/').to_string();
        Self {
            api_key,
            model,
            api_url,
            system_instruction: None,
            verbose: false,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_system_instruction(mut self, instruction: Option<String>) -> Self {
        self.system_instruction = instruction;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn generate_content_url(&self) -> String {
        let model = self.model.strip_prefix("models/").unwrap_or(&self.model);
        format!("{}/models/{}:generateContent", self.api_url, model)
    }

    fn build_request(&self, history: &[Turn], message: &str) -> GenerateContentRequest {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content::text(Some(turn.role().as_str()), turn.text()))
            .collect();
        contents.push(Content::text(Some("user"), message));

        GenerateContentRequest {
            contents,
            system_instruction: self
                .system_instruction
                .as_deref()
                .map(|instruction| Content::text(None, instruction)),
        }
    }
}

/// Pull the reply text out of a successful response body
fn extract_reply(body: &str) -> Result<String, LlmError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;

    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default();

    let texts: Vec<String> = parts.into_iter().filter_map(|part| part.text).collect();
    if texts.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    Ok(texts.concat())
}

/// Prefer the API's `error.message`, fall back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, history: &[Turn], message: &str) -> Result<String, LlmError> {
        let url = self.generate_content_url();
        let request = self.build_request(history, message);

        if self.verbose {
            let body = serde_json::to_value(&request)?;
            log_request(&url, &body, &self.api_key, true);
        }

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log_response(&status, &body, self.verbose);

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        extract_reply(&body)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client() -> GeminiClient {
        GeminiClient::new(
            "test-key".to_string(),
            "gemini-2.5-flash".to_string(),
            "https://example.test/v1beta/".to_string(),
        )
    }

    #[test]
    fn test_url_strips_trailing_slash_and_models_prefix() {
        assert_eq!(
            client().generate_content_url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );

        let prefixed = GeminiClient::new(
            "k".to_string(),
            "models/gemini-2.0-flash".to_string(),
            "https://example.test/v1beta".to_string(),
        );
        assert_eq!(
            prefixed.generate_content_url(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_request_carries_history_then_new_message() {
        let history = vec![Turn::user("Bonjour"), Turn::model("Salut !")];
        let request = client().build_request(&history, "Ça va ?");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "Bonjour" }] },
                    { "role": "model", "parts": [{ "text": "Salut !" }] },
                    { "role": "user", "parts": [{ "text": "Ça va ?" }] }
                ]
            })
        );
    }

    #[test]
    fn test_request_includes_system_instruction_when_set() {
        let request = client()
            .with_system_instruction(Some("Tu es KeTeaAI.".to_string()))
            .build_request(&[], "Bonjour");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["system_instruction"],
            json!({ "parts": [{ "text": "Tu es KeTeaAI." }] })
        );
        assert_eq!(value["contents"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_extract_reply_concatenates_text_parts() {
        let body = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Salut" }, { "text": " !" }] },
                "finishReason": "STOP"
            }]
        })
        .to_string();

        assert_eq!(extract_reply(&body).unwrap(), "Salut !");
    }

    #[test]
    fn test_extract_reply_without_candidates_is_empty_response() {
        let err = extract_reply(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));

        let blocked = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        assert!(matches!(extract_reply(blocked).unwrap_err(), LlmError::EmptyResponse));
    }

    #[test]
    fn test_extract_reply_rejects_malformed_json() {
        let err = extract_reply("<html>oops</html>").unwrap_err();
        assert!(matches!(err, LlmError::InvalidJson(_)));
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(error_message(body), "Quota exceeded");
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }
}
