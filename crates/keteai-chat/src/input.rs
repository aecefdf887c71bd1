use keteai_types::is_exit_keyword;

/// What a line typed at the prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInput<'a> {
    /// One of the exit keywords
    Exit,
    /// Nothing but whitespace; nothing is sent
    Empty,
    /// Anything else, kept exactly as typed
    Message(&'a str),
}

pub fn classify_input(line: &str) -> UserInput<'_> {
    if line.trim().is_empty() {
        UserInput::Empty
    } else if is_exit_keyword(line) {
        UserInput::Exit
    } else {
        UserInput::Message(line)
    }
}
