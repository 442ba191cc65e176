//! folio console entry point.
//!
//! Runs the portfolio terminal on stdin/stdout. The first argument (or the
//! `FOLIO_PROFILE` environment variable) names a TOML/JSON profile;
//! `--remote` selects the remote-shell preset instead. Type `clear` to reset
//! the screen, end input (Ctrl-D) to quit.

mod console;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use folio_terminal::{CommandRegistry, Profile, SessionConfig, TerminalSession, portfolio_registry};
use render::Style;

const REMOTE_FLAG: &str = "--remote";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let selector = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_PROFILE").ok());
    let (registry, config) = resolve_session(selector.as_deref())?;
    log::info!(
        "Starting folio ({} commands, prompt {:?})",
        registry.len(),
        config.prompt
    );

    let mut session = TerminalSession::new(Arc::new(registry), config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let style = if stdout.is_terminal() {
        Style::from_env()
    } else {
        Style::plain()
    };
    // A tty already shows the typed line after the prompt.
    let echoed = stdin.is_terminal();
    console::run(&mut session, stdin.lock(), &mut stdout, style, echoed)
        .context("terminal I/O failed")?;
    Ok(())
}

fn resolve_session(selector: Option<&str>) -> Result<(CommandRegistry, SessionConfig)> {
    match selector {
        None => Ok((portfolio_registry()?, SessionConfig::default())),
        Some(REMOTE_FLAG) => Ok((portfolio_registry()?, SessionConfig::remote_shell())),
        Some(path) => {
            let path = PathBuf::from(path);
            let profile = Profile::load(&path)
                .with_context(|| format!("failed to load profile {}", path.display()))?;
            profile
                .build()
                .with_context(|| format!("invalid profile {}", path.display()))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selector_uses_defaults() {
        let (reg, config) = resolve_session(None).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert!(reg.contains("help"));
    }

    #[test]
    fn remote_flag_selects_preset() {
        let (_, config) = resolve_session(Some(REMOTE_FLAG)).unwrap();
        assert_eq!(config, SessionConfig::remote_shell());
    }

    #[test]
    fn missing_profile_reports_path() {
        let err = resolve_session(Some("/nonexistent/folio.toml")).unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/folio.toml"));
    }
}
