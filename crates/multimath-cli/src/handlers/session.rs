//! Session command handler
//!
//! Reads one command per line. Besides calculations (`add 2 3`, `log 8 2`)
//! the session understands `history`, `clear` and `quit`/`exit`.

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{CalcReport, OutputFormat};
use crate::SessionArgs;
use multimath::calc::history::History;
use multimath::calc::session::Session;
use multimath::calc::OperationRequest;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand<'a> {
    /// Evaluate a calculation
    Calculate(&'a str),
    /// Print the history
    History,
    /// Reset display and history
    Clear,
    /// End the session
    Quit,
    /// Blank line or `#` comment
    Skip,
}

impl<'a> SessionCommand<'a> {
    /// Classifies one input line
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Self::Skip,
            l if l.starts_with('#') => Self::Skip,
            "history" => Self::History,
            "clear" => Self::Clear,
            "quit" | "exit" => Self::Quit,
            l => Self::Calculate(l),
        }
    }
}

/// Runs the session command against stdin or `--input`
pub fn execute_session<W: Write>(
    config: &CliConfig,
    args: &SessionArgs,
    out: &mut W,
) -> CliResult<Session> {
    let session = Session::with_history(History::with_capacity(args.history));
    match &args.input {
        Some(path) => run_session(config, session, BufReader::new(File::open(path)?), out),
        None => run_session(config, session, std::io::stdin().lock(), out),
    }
}

/// Drives `session` with every line of `input`
///
/// Rejected calculations set the display to their sentinel and the session
/// carries on.
pub fn run_session<R: BufRead, W: Write>(
    config: &CliConfig,
    mut session: Session,
    input: R,
    out: &mut W,
) -> CliResult<Session> {
    for line in input.lines() {
        let line = line?;
        match SessionCommand::parse(&line) {
            SessionCommand::Skip => {}
            SessionCommand::Quit => break,
            SessionCommand::History => write_history(config, &session, out)?,
            SessionCommand::Clear => {
                session = session.cleared();
                CalcReport::display_only(session.display()).write_to(config.format, out)?;
            }
            SessionCommand::Calculate(text) => {
                let outcome = match text.parse::<OperationRequest>() {
                    Ok(request) => {
                        let (next, outcome) = session.apply(&request);
                        session = next;
                        CalcReport::new(session.display(), &outcome).write_to(config.format, out)?;
                        outcome
                    }
                    Err(err) => {
                        let sentinel = err.sentinel();
                        let outcome = Err(err);
                        CalcReport::new(sentinel, &outcome).write_to(config.format, out)?;
                        outcome
                    }
                };
                if let Err(err) = outcome {
                    tracing::info!(input = text, code = err.code(), "calculation rejected");
                }
            }
        }
    }
    tracing::debug!(entries = session.history().len(), "session finished");
    Ok(session)
}

fn write_history<W: Write>(config: &CliConfig, session: &Session, out: &mut W) -> CliResult<()> {
    let history = session.history();
    match config.format {
        OutputFormat::Json => writeln!(out, "{}", history.to_json()?)?,
        OutputFormat::Text if history.is_empty() => writeln!(out, "(no history)")?,
        OutputFormat::Text => writeln!(out, "{}", history.export_formatted())?,
    }
    Ok(())
}
