//! Session profiles loaded from TOML or JSON files.
//!
//! A profile overrides the prompt, seed and `clear` behaviour of a session
//! and adds commands and aliases on top of (or instead of) the built-ins.

use std::collections::BTreeMap;
use std::path::Path;

use folio_types::entry::LogEntry;
use folio_types::error::{FolioError, Result};
use serde::Deserialize;

use crate::builtins::register_builtins;
use crate::registry::{CommandRegistry, CommandSpec};
use crate::session::SessionConfig;

/// On-disk profile (`profile.toml` / `profile.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub seed: Option<Vec<LogEntry>>,
    #[serde(default)]
    pub cleared: Option<Vec<LogEntry>>,
    #[serde(default)]
    pub not_found_hint: Option<String>,
    #[serde(default = "yes")]
    pub include_builtins: bool,
    #[serde(default)]
    pub commands: Vec<CommandSpec>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

fn yes() -> bool {
    true
}

impl Profile {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a profile, choosing the format by file extension
    /// (`.json` is JSON, anything else TOML).
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let profile = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };
        log::info!(
            "Loaded profile {} ({} commands, {} aliases)",
            path.display(),
            profile.commands.len(),
            profile.aliases.len()
        );
        Ok(profile)
    }

    /// Build the registry and session configuration this profile describes.
    ///
    /// Profile commands and aliases replace built-ins with the same name.
    pub fn build(self) -> Result<(CommandRegistry, SessionConfig)> {
        let mut builder = CommandRegistry::builder();
        if self.include_builtins {
            builder = register_builtins(builder);
        }
        for spec in self.commands {
            builder = builder.override_command(spec);
        }
        for (alias, target) in self.aliases {
            builder = builder.override_alias(alias, target);
        }
        let registry = builder.build()?;

        let defaults = SessionConfig::default();
        let seed = self.seed.unwrap_or(defaults.seed);
        if seed.is_empty() {
            log::warn!("Profile seed is empty; the terminal will start blank");
        }
        let config = SessionConfig {
            prompt: self.prompt.unwrap_or(defaults.prompt),
            seed,
            cleared: self.cleared,
            not_found_hint: self.not_found_hint,
        };
        validate_prompt(&config.prompt)?;
        Ok((registry, config))
    }
}

fn validate_prompt(prompt: &str) -> Result<()> {
    if prompt.contains('\n') {
        return Err(FolioError::Config(
            "prompt must fit on a single line".to_string(),
        ));
    }
    Ok(())
}
