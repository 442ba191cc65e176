//! Terminal log entries.

use serde::{Deserialize, Serialize};

/// What a log entry represents, which decides how it is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Headline line of a session seed.
    Banner,
    /// Plain informational line (seed hints, "Console cleared.").
    Text,
    /// Echo of a submitted line, prompt included.
    Command,
    /// One line of a command's output.
    Output,
    /// Command-not-found message.
    Error,
}

/// A single displayed line of the terminal transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub kind: EntryKind,
    pub text: String,
}

impl LogEntry {
    pub fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn banner(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Banner, text)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Text, text)
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Command, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Error, text)
    }
}
