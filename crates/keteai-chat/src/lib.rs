//! Chat session logic: date/time context injection and the linear history.

pub mod context;
pub mod error;
pub mod input;
pub mod session;

pub use context::{compose_message, context_banner_now, format_context_banner};
pub use error::ChatError;
pub use input::{classify_input, UserInput};
pub use session::ChatSession;
