//! Foundation types for folio.
//!
//! Shared by the terminal library and the console front-end: the log entry
//! model displayed by a terminal session and the error type used when
//! building registries and loading profiles.

pub mod entry;
pub mod error;

pub use entry::{EntryKind, LogEntry};
pub use error::{FolioError, Result};
