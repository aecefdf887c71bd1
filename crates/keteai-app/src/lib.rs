//! KeTeaAI application library
//!
//! Command-line wiring around the chat session: argument parsing,
//! configuration and the interactive loop.

pub use keteai_chat as chat;
pub use keteai_llm_api as llm_api;
pub use keteai_logging as logging;
pub use keteai_types as types;

pub mod app;
pub mod cli;
pub mod config;

pub use app::{process_line, run_repl_mode, LoopControl};
pub use cli::Cli;
pub use config::setup_from_cli;
