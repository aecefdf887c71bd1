use clap::Parser;
use keteai_llm_api::GEMINI_API_URL;
use keteai_types::DEFAULT_MODEL;
use std::path::PathBuf;

/// CLI arguments for keteai
#[derive(Parser, Debug)]
#[command(name = "keteai")]
#[command(about = "KeTeaAI - discussion avec Gemini depuis le terminal")]
#[command(version)]
pub struct Cli {
    /// Gemini API key (falls back to GOOGLE_API_KEY)
    #[arg(long, value_name = "KEY", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model answering the conversation
    #[arg(long, value_name = "MODEL", env = "KETEAI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Model tried once when the main model fails
    #[arg(long, value_name = "MODEL", env = "KETEAI_FALLBACK_MODEL")]
    pub fallback_model: Option<String>,

    /// Base URL of the Gemini API
    #[arg(long, value_name = "URL", env = "KETEAI_API_URL", default_value = GEMINI_API_URL)]
    pub api_url: String,

    /// Send the KeTeaAI student-assistant system instruction
    #[arg(long)]
    pub persona: bool,

    /// Write a JSONL log of the conversation into this directory
    #[arg(long, value_name = "DIR", env = "KETEAI_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Enable verbose debug output (shows HTTP requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
