//! Terminal session: the transcript log and line submission.

use std::sync::Arc;

use folio_types::entry::LogEntry;

use crate::registry::{CommandRegistry, RESERVED_CLEAR, normalize};

/// Prompt used by the default session.
pub const DEFAULT_PROMPT: &str = "visitor@younes.dev:~$ ";

/// Prefix of the message appended for unknown commands.
pub const NOT_FOUND_PREFIX: &str = "Command not found: ";

/// How a session greets the visitor and reacts to `clear`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Prefix of every echoed command line.
    pub prompt: String,
    /// Entries the log starts with.
    pub seed: Vec<LogEntry>,
    /// Entries the log is reset to by `clear`; `None` reuses `seed`.
    pub cleared: Option<Vec<LogEntry>>,
    /// Appended after `Command not found: <input>`.
    pub not_found_hint: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            seed: vec![
                LogEntry::banner("Welcome to Younes' terminal portfolio"),
                LogEntry::text("Type \"help\" to see available commands."),
            ],
            cleared: None,
            not_found_hint: None,
        }
    }
}

impl SessionConfig {
    /// The "remote instance" flavour of the widget.
    pub fn remote_shell() -> Self {
        Self {
            prompt: "guest@portfolio:~$ ".to_string(),
            seed: vec![
                LogEntry::banner("Younes Interactive Shell v2.0.4"),
                LogEntry::text("Connected to remote instance."),
                LogEntry::text("Type \"help\" to view available commands."),
            ],
            cleared: Some(vec![LogEntry::text("Console cleared.")]),
            not_found_hint: Some(". Try \"help\".".to_string()),
        }
    }

    fn reset_entries(&self) -> &[LogEntry] {
        self.cleared.as_deref().unwrap_or(&self.seed)
    }
}

/// Result of a single [`TerminalSession::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; the log is unchanged.
    Ignored,
    /// `clear` replaced the whole log.
    Cleared,
    /// This many entries were appended (echo included).
    Appended(usize),
}

/// One visitor's terminal: an append-only log over a shared registry.
#[derive(Debug, Clone)]
pub struct TerminalSession {
    registry: Arc<CommandRegistry>,
    config: SessionConfig,
    log: Vec<LogEntry>,
}

impl TerminalSession {
    pub fn new(registry: Arc<CommandRegistry>, config: SessionConfig) -> Self {
        let log = config.seed.clone();
        Self {
            registry,
            config,
            log,
        }
    }

    /// Session with the default prompt and seed.
    pub fn with_registry(registry: Arc<CommandRegistry>) -> Self {
        Self::new(registry, SessionConfig::default())
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Replace the log with the post-`clear` entries.
    pub fn reset(&mut self) {
        self.log = self.config.reset_entries().to_vec();
    }

    /// Interpret one submitted input line.
    ///
    /// The echo keeps the visitor's casing; lookup uses the lowercased form.
    /// Output is all-or-nothing: either every output line of the resolved
    /// command is appended, or a single not-found error.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let value = raw.trim();
        if value.is_empty() {
            return SubmitOutcome::Ignored;
        }

        if normalize(value) == RESERVED_CLEAR {
            log::debug!("Session cleared ({} entries dropped)", self.log.len());
            self.reset();
            return SubmitOutcome::Cleared;
        }

        let before = self.log.len();
        self.log
            .push(LogEntry::command(format!("{}{value}", self.config.prompt)));

        match self.registry.lookup(value) {
            Some(spec) => {
                self.log
                    .extend(spec.output.iter().map(|line| LogEntry::output(line.as_str())));
            },
            None => {
                log::trace!("Unknown command: {value}");
                let hint = self.config.not_found_hint.as_deref().unwrap_or("");
                self.log
                    .push(LogEntry::error(format!("{NOT_FOUND_PREFIX}{value}{hint}")));
            },
        }

        SubmitOutcome::Appended(self.log.len() - before)
    }
}

#[cfg(test)]
mod tests {
    use folio_types::entry::EntryKind;

    use super::*;
    use crate::builtins::portfolio_registry;
    use crate::registry::CommandSpec;

    fn session() -> TerminalSession {
        TerminalSession::with_registry(Arc::new(portfolio_registry().unwrap()))
    }

    #[test]
    fn starts_with_seed() {
        let s = session();
        assert_eq!(s.log(), SessionConfig::default().seed.as_slice());
        assert_eq!(s.log()[0].kind, EntryKind::Banner);
    }

    #[test]
    fn about_appends_echo_and_output() {
        let mut s = session();
        let expected = s.registry().lookup("about").unwrap().output.clone();
        assert_eq!(s.submit("about"), SubmitOutcome::Appended(1 + expected.len()));

        let echo = &s.log()[2];
        assert_eq!(echo.kind, EntryKind::Command);
        assert_eq!(echo.text, "visitor@younes.dev:~$ about");
        let printed: Vec<&str> = s.log()[3..].iter().map(|e| e.text.as_str()).collect();
        assert_eq!(printed, expected);
        assert!(s.log()[3..].iter().all(|e| e.kind == EntryKind::Output));
    }

    #[test]
    fn unknown_command_appends_echo_and_error() {
        let mut s = session();
        assert_eq!(s.submit("  rm -rf /  "), SubmitOutcome::Appended(2));
        assert_eq!(s.log()[2].text, "visitor@younes.dev:~$ rm -rf /");
        assert_eq!(s.log()[3], LogEntry::error("Command not found: rm -rf /"));
    }

    #[test]
    fn echo_keeps_original_casing() {
        let mut s = session();
        s.submit("  WhoAmI ");
        assert_eq!(s.log()[2].text, "visitor@younes.dev:~$ WhoAmI");
        assert_eq!(s.log()[3].text, "guest@younes.dev (Access Level: VISITOR)");
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut s = session();
        assert_eq!(s.submit(""), SubmitOutcome::Ignored);
        assert_eq!(s.submit("   \t"), SubmitOutcome::Ignored);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn clear_variants_reset_to_seed() {
        for input in ["clear", "CLEAR", "  clear  ", "Clear"] {
            let mut s = session();
            s.submit("help");
            s.submit("nope");
            assert_eq!(s.submit(input), SubmitOutcome::Cleared);
            assert_eq!(s.log(), SessionConfig::default().seed.as_slice());
        }
    }

    #[test]
    fn help_with_argument_is_not_found() {
        let mut s = session();
        s.submit("help now");
        assert_eq!(s.log()[3].kind, EntryKind::Error);
        assert_eq!(s.log()[3].text, "Command not found: help now");
    }

    #[test]
    fn repeated_command_appends_twice() {
        let mut s = session();
        s.submit("pwd");
        s.submit("pwd");
        let texts: Vec<&str> = s.log()[2..].iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "visitor@younes.dev:~$ pwd",
                "/home/guest/portfolio",
                "visitor@younes.dev:~$ pwd",
                "/home/guest/portfolio",
            ]
        );
    }

    #[test]
    fn empty_output_appends_only_echo() {
        let reg = CommandRegistry::builder()
            .command(CommandSpec::new("noop", "Does nothing"))
            .build()
            .unwrap();
        let mut s = TerminalSession::with_registry(Arc::new(reg));
        assert_eq!(s.submit("noop"), SubmitOutcome::Appended(1));
        assert_eq!(s.log().last().unwrap().kind, EntryKind::Command);
    }

    #[test]
    fn remote_shell_clears_to_notice() {
        let reg = Arc::new(portfolio_registry().unwrap());
        let mut s = TerminalSession::new(reg, SessionConfig::remote_shell());
        assert_eq!(s.len(), 3);
        s.submit("xyz");
        assert_eq!(s.log()[3].text, "guest@portfolio:~$ xyz");
        assert_eq!(s.log()[4].text, "Command not found: xyz. Try \"help\".");
        s.submit("clear");
        assert_eq!(s.log(), &[LogEntry::text("Console cleared.")]);
    }

    #[test]
    fn sessions_share_registry_independently() {
        let reg = Arc::new(portfolio_registry().unwrap());
        let mut a = TerminalSession::with_registry(Arc::clone(&reg));
        let b = TerminalSession::with_registry(Arc::clone(&reg));
        a.submit("ls");
        assert_eq!(b.len(), 2);
        assert!(a.len() > b.len());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_builtin() -> impl Strategy<Value = String> {
            let names: Vec<String> = portfolio_registry()
                .unwrap()
                .names()
                .into_iter()
                .map(str::to_string)
                .collect();
            proptest::sample::select(names)
        }

        fn arb_history() -> impl Strategy<Value = Vec<String>> {
            proptest::collection::vec(
                prop_oneof![arb_builtin(), "[a-z ]{0,12}"]
                    .prop_filter("clear resets the log", |line| normalize(line) != RESERVED_CLEAR),
                0..12,
            )
        }

        proptest! {
            #[test]
            fn registered_command_appends_echo_plus_output(name in arb_builtin()) {
                let mut s = session();
                let before = s.len();
                let expected = s.registry().lookup(&name).unwrap().output.len();
                s.submit(&name);
                prop_assert_eq!(s.len() - before, 1 + expected);
            }

            #[test]
            fn unknown_input_appends_echo_and_error(input in "[a-z0-9_ ]{1,16}[a-z0-9]") {
                let mut s = session();
                let trimmed = input.trim().to_string();
                prop_assume!(s.registry().lookup(&trimmed).is_none());
                prop_assume!(trimmed != "clear");
                let before = s.len();
                s.submit(&input);
                prop_assert_eq!(s.len() - before, 2);
                let last = s.log().last().unwrap();
                prop_assert_eq!(last.kind, EntryKind::Error);
                prop_assert!(last.text.contains(&trimmed));
            }

            #[test]
            fn whitespace_only_input_appends_nothing(input in "[ \t]{0,8}") {
                let mut s = session();
                prop_assert_eq!(s.submit(&input), SubmitOutcome::Ignored);
                prop_assert_eq!(s.len(), 2);
            }

            #[test]
            fn clear_always_restores_seed(history in arb_history(), pad in " {0,3}") {
                let mut s = session();
                for line in &history {
                    s.submit(line);
                }
                s.submit(&format!("{pad}CLEAR{pad}"));
                let seed = SessionConfig::default().seed;
                prop_assert_eq!(s.log(), seed.as_slice());
            }

            #[test]
            fn case_does_not_change_output(name in arb_builtin()) {
                let mut lower = session();
                let mut upper = session();
                lower.submit(&name);
                upper.submit(&name.to_uppercase());
                prop_assert_eq!(&lower.log()[3..], &upper.log()[3..]);
            }

            #[test]
            fn log_only_grows_without_clear(history in arb_history()) {
                let mut s = session();
                let mut prev = s.log().to_vec();
                for line in &history {
                    s.submit(line);
                    prop_assert!(s.log().starts_with(&prev));
                    prev = s.log().to_vec();
                }
            }
        }
    }
}
