//! Command records and the immutable lookup table.
//!
//! Lookup is exact after normalization (trim + lowercase). There is no
//! argument parsing: `help now` is looked up as the whole string.

use std::collections::{BTreeMap, HashMap};

use folio_types::error::{FolioError, Result};
use serde::{Deserialize, Serialize};

/// Name intercepted by the session before any lookup.
pub const RESERVED_CLEAR: &str = "clear";

/// Group a command is listed under.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Essentials,
    #[default]
    Info,
    Simulation,
    Environment,
    EasterEgg,
}

/// A single command: its name, help text, and the lines it prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub output: Vec<String>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: Category::default(),
            output: Vec::new(),
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output = lines.into_iter().map(Into::into).collect();
        self
    }
}

/// One row of the registry listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub category: Category,
}

/// Trim and lowercase user input into a lookup key.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Immutable table of commands and aliases.
///
/// Built once through [`RegistryBuilder`] and then shared read-only by any
/// number of sessions.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandSpec>,
    /// alias -> canonical command key
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Resolve user input to a command record.
    ///
    /// Commands are checked before aliases; both are exact matches on the
    /// normalized input.
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        let key = normalize(name);
        if let Some(spec) = self.commands.get(&key) {
            return Some(spec);
        }
        self.aliases
            .get(&key)
            .and_then(|target| self.commands.get(target))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of canonical commands (aliases not counted).
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sorted canonical command names.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Sorted aliases bound to the given command.
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        let key = normalize(name);
        let mut out: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, target)| **target == key)
            .map(|(alias, _)| alias.as_str())
            .collect();
        out.sort_unstable();
        out
    }

    /// Commands grouped by category, then sorted by name.
    pub fn listing(&self) -> Vec<ListingRow<'_>> {
        let mut rows: Vec<ListingRow<'_>> = self
            .commands
            .iter()
            .map(|(key, spec)| ListingRow {
                name: key.as_str(),
                description: spec.description.as_str(),
                category: spec.category,
            })
            .collect();
        rows.sort_by(|a, b| a.category.cmp(&b.category).then(a.name.cmp(b.name)));
        rows
    }
}

/// Collects commands and aliases, validating them on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    commands: Vec<CommandSpec>,
    aliases: Vec<(String, String)>,
}

impl RegistryBuilder {
    pub fn command(mut self, spec: CommandSpec) -> Self {
        self.commands.push(spec);
        self
    }

    pub fn commands<I>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = CommandSpec>,
    {
        self.commands.extend(specs);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), target.into()));
        self
    }

    /// Replace any queued command or alias with the same normalized name,
    /// or add it.
    pub fn override_command(mut self, spec: CommandSpec) -> Self {
        let key = normalize(&spec.name);
        self.commands.retain(|c| normalize(&c.name) != key);
        self.aliases.retain(|(alias, _)| normalize(alias) != key);
        self.commands.push(spec);
        self
    }

    /// Rebind an alias, dropping any queued alias with the same normalized
    /// name.
    pub fn override_alias(
        mut self,
        alias: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        let alias = alias.into();
        let key = normalize(&alias);
        self.aliases.retain(|(queued, _)| normalize(queued) != key);
        self.aliases.push((alias, target.into()));
        self
    }

    pub fn build(self) -> Result<CommandRegistry> {
        let mut commands = HashMap::with_capacity(self.commands.len());
        for spec in self.commands {
            let key = checked_key(&spec.name, "command")?;
            if commands.contains_key(&key) {
                return Err(FolioError::Registry(format!("duplicate command: {key}")));
            }
            commands.insert(key, spec);
        }

        // BTreeMap keeps error reporting deterministic.
        let mut aliases = BTreeMap::new();
        for (alias, target) in self.aliases {
            let key = checked_key(&alias, "alias")?;
            let target = normalize(&target);
            if commands.contains_key(&key) {
                return Err(FolioError::Registry(format!(
                    "alias {key} shadows a command"
                )));
            }
            if aliases.contains_key(&key) {
                return Err(FolioError::Registry(format!("duplicate alias: {key}")));
            }
            if !commands.contains_key(&target) {
                return Err(FolioError::Registry(format!(
                    "alias {key} points to unknown command: {target}"
                )));
            }
            aliases.insert(key, target);
        }

        log::debug!(
            "Built command registry: {} commands, {} aliases",
            commands.len(),
            aliases.len()
        );
        Ok(CommandRegistry {
            commands,
            aliases: aliases.into_iter().collect(),
        })
    }
}

fn checked_key(name: &str, what: &str) -> Result<String> {
    let key = normalize(name);
    if key.is_empty() {
        return Err(FolioError::Registry(format!("empty {what} name")));
    }
    if key == RESERVED_CLEAR {
        return Err(FolioError::Registry(format!(
            "{what} name '{RESERVED_CLEAR}' is reserved"
        )));
    }
    Ok(key)
}
