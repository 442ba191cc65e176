//! ANSI rendering of log entries.

use folio_terminal::{EntryKind, LogEntry};

const RESET: &str = "\x1b[0m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

/// Clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Whether output carries ANSI styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    /// Colors unless `NO_COLOR` is set to a non-empty value.
    pub fn from_env() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self { color: !no_color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn code(self, kind: EntryKind) -> Option<&'static str> {
        if !self.color {
            return None;
        }
        match kind {
            EntryKind::Banner => Some(BOLD_GREEN),
            EntryKind::Command => Some(DIM),
            EntryKind::Error => Some(RED),
            EntryKind::Text | EntryKind::Output => None,
        }
    }

    /// One display line for an entry, without the trailing newline.
    pub fn entry(self, entry: &LogEntry) -> String {
        match self.code(entry.kind) {
            Some(code) => format!("{code}{}{RESET}", entry.text),
            None => entry.text.clone(),
        }
    }

    /// The input prompt shown before each read.
    pub fn prompt(self, prompt: &str) -> String {
        if self.color {
            format!("{GREEN}{prompt}{RESET}")
        } else {
            prompt.to_string()
        }
    }
}
