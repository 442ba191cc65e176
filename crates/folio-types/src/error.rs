//! Error types for folio.
//!
//! Only construction-time failures live here. An unknown command typed into
//! a session is not an error; it becomes an `EntryKind::Error` log entry.

use std::io;

/// Errors produced while building registries or loading profiles.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("registry error: {0}")]
    Registry(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
