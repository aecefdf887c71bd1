//! # keteai-llm-api
//!
//! Client side of the remote language model.
//!
//! - **`LlmClient`**: the request/response boundary used by the chat session
//! - **`GeminiClient`**: Google Gemini `generateContent` over HTTP
//! - **`FallbackClient`**: tries a second model once when the first one fails
//! - **`ClientFactory`**: builds the configured client stack
//!
//! ## Example
//!
//! ```rust,no_run
//! use keteai_llm_api::{ClientConfig, ClientFactory, LlmClient};
//! use keteai_types::Turn;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), keteai_llm_api::LlmError> {
//!     let config = ClientConfig::new("your-api-key".to_string());
//!     let client = ClientFactory::create(&config);
//!
//!     let history = vec![Turn::user("Bonjour"), Turn::model("Salut !")];
//!     let reply = client.generate(&history, "Quelle heure est-il ?").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{fallback::FallbackClient, gemini::GeminiClient, LlmClient};
pub use config::{ClientConfig, ClientFactory, GEMINI_API_URL, PERSONA_INSTRUCTION};
pub use error::LlmError;
