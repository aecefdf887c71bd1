use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

#[derive(Serialize)]
struct LogEntry<'a> {
    timestamp: String, // ISO‑8601 Local time
    role: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

/// Append-only JSONL record of a chat session
pub struct ConversationLogger {
    file_path: PathBuf,
    file: Option<tokio::fs::File>,
}

impl ConversationLogger {
    /// Create a new logger; generates the file name based on the current local time.
    pub async fn new(log_dir: &Path) -> Result<Self> {
        fs::create_dir_all(log_dir)
            .await
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

        let filename = format!("keteai-{}.jsonl", Local::now().format("%Y-%m-%d-%H%M%S"));
        let file_path = log_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await
            .with_context(|| format!("Failed to open log file {}", file_path.display()))?;

        Ok(Self {
            file_path,
            file: Some(file),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Append a single log entry. Write errors are reported and swallowed.
    pub async fn log(&mut self, role: &str, content: &str, model: Option<&str>) {
        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            role,
            content,
            model,
        };
        let Some(file) = &mut self.file else {
            return;
        };
        let Ok(mut line) = serde_json::to_string(&entry) else {
            return;
        };
        line.push('\n');

        if let Err(e) = file.write_all(line.as_bytes()).await {
            eprintln!("[Logging error] {}", e);
        } else if let Err(e) = file.flush().await {
            eprintln!("[Logging error] {}", e);
        }
    }

    /// Close the logger. Called on graceful shutdown.
    pub async fn shutdown(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.sync_all().await;
        }
    }
}
