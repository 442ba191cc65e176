//! Terminal command simulator.
//!
//! A static, registry-based command table and a per-visitor session. The
//! session trims and lowercases each submitted line, intercepts `clear`,
//! echoes the line after the prompt, and appends either the command's fixed
//! output or a not-found error. No command takes arguments.

pub mod builtins;
pub mod profile;
pub mod registry;
pub mod session;

/// Build the registry holding the built-in portfolio commands.
pub use builtins::portfolio_registry;
/// Queue the built-in commands on a registry builder.
pub use builtins::register_builtins;
/// Session overrides and extra commands loaded from a file.
pub use profile::Profile;
/// Listing group of a command.
pub use registry::Category;
/// A single command record.
pub use registry::CommandSpec;
/// Immutable name/alias lookup table.
pub use registry::CommandRegistry;
/// Validating builder for [`CommandRegistry`].
pub use registry::RegistryBuilder;
/// Prompt, seed, and `clear` behaviour of a session.
pub use session::SessionConfig;
/// What a single submission did to the log.
pub use session::SubmitOutcome;
/// One visitor's transcript over a shared registry.
pub use session::TerminalSession;

pub use folio_types::{EntryKind, FolioError, LogEntry, Result};
