//! Core types shared across the keteai crates.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Model used when nothing else is configured
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Words that end the REPL, compared case-insensitively
pub const EXIT_KEYWORDS: [&str; 3] = ["quit", "exit", "quitter"];

/// Returns true when `input` is one of the exit keywords.
pub fn is_exit_keyword(input: &str) -> bool {
    let input = input.trim();
    EXIT_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(input))
}

// ============================================================================
// Conversation Types
// ============================================================================

/// Author of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message exchanged within a session.
///
/// Fields are private so a turn cannot change once it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    text: String,
}

impl Turn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
