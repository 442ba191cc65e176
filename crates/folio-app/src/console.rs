//! Line-oriented front-end: reads submissions and redraws the transcript.

use std::io::{BufRead, Write};

use folio_terminal::{SubmitOutcome, TerminalSession};

use crate::render::{CLEAR_SCREEN, Style};

/// Drive a session from `input` until EOF, writing the transcript to `out`.
///
/// `echoed` is true when the input device already shows each typed line
/// after the prompt (an interactive tty). Otherwise every line is closed
/// with a newline and the command echo entry is rendered too.
pub fn run<R, W>(
    session: &mut TerminalSession,
    input: R,
    out: &mut W,
    style: Style,
    echoed: bool,
) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    draw_all(session, out, style)?;
    write!(out, "{}", style.prompt(session.prompt()))?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if !echoed {
            writeln!(out)?;
        }
        match session.submit(&line) {
            SubmitOutcome::Ignored => {},
            SubmitOutcome::Cleared => {
                if style.color {
                    write!(out, "{CLEAR_SCREEN}")?;
                }
                draw_all(session, out, style)?;
            },
            SubmitOutcome::Appended(n) => {
                let log = session.log();
                let skip = usize::from(echoed);
                for entry in log[log.len() - n..].iter().skip(skip) {
                    writeln!(out, "{}", style.entry(entry))?;
                }
            },
        }
        write!(out, "{}", style.prompt(session.prompt()))?;
        out.flush()?;
    }
    writeln!(out)?;
    log::info!("Input closed after {} log entries", session.len());
    Ok(())
}

fn draw_all<W: Write>(
    session: &TerminalSession,
    out: &mut W,
    style: Style,
) -> std::io::Result<()> {
    for entry in session.log() {
        writeln!(out, "{}", style.entry(entry))?;
    }
    Ok(())
}
