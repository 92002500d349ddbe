//! Interactive resolution of the `Ask` debug action.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::constants::PROMPT_MAX_RETRIES;
use crate::policy::DebugAction;

/// Strategy consulted when the configured debug action is `Ask`.
///
/// Implementations choose one of the non-`Ask` actions. A strategy that
/// answers `Ask` again has declined to choose; the dispatcher falls back
/// to `Abort`.
pub trait PromptStrategy: Send + Sync {
    /// Pick the action to take for the violation described by `message`.
    fn resolve(&self, message: &str) -> DebugAction;
}

/// Default strategy: interactive menu on stderr/stdin.
///
/// EOF, a closed stdin, or repeated unrecognized answers fall back to
/// `Abort` so non-interactive runs stay terminal.
pub struct StdioPrompt;

impl PromptStrategy for StdioPrompt {
    fn resolve(&self, message: &str) -> DebugAction {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        for _ in 0..PROMPT_MAX_RETRIES {
            let mut err = io::stderr();
            let _ = writeln!(err, "{message}");
            let _ = write!(
                err,
                "(C)ontinue, (A)bort, (S)top, (R)aise, invoke (G)DB, invoke (L)LDB: "
            );
            let _ = err.flush();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                // EOF or read failure: nobody is listening.
                _ => return DebugAction::Abort,
            };
            match line.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('c') => return DebugAction::Continue,
                Some('a') => return DebugAction::Abort,
                Some('s') => return DebugAction::Stop,
                Some('r') => return DebugAction::Raise,
                Some('g') => return DebugAction::InvokeGdb,
                Some('l') => return DebugAction::InvokeLldb,
                _ => warn!(answer = %line.trim(), "unrecognized answer"),
            }
        }
        DebugAction::Abort
    }
}
