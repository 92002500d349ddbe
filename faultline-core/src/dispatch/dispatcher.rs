//! Action resolution for fatal errors and assertion failures.

use std::convert::Infallible;
use std::process;

use tracing::error;

use super::debugger::{CommandDebugger, DebuggerAttach, DebuggerKind};
use super::prompt::{PromptStrategy, StdioPrompt};
use crate::errors::FatalError;
use crate::exit_codes;
use crate::policy::{DebugAction, ExitAction, PolicyStore};

/// Context for an assertion failure: where it fired and what was asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssertionViolation {
    pub file: &'static str,
    pub line: u32,
    pub condition: &'static str,
}

impl std::fmt::Display for AssertionViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "assertion violation at {}:{}: {}",
            self.file, self.line, self.condition
        )
    }
}

/// Performs the configured response to fatal errors and assertion
/// failures.
///
/// Owns the pluggable seams: the `Ask` prompt strategy and the external
/// debugger attach mechanism.
pub struct Dispatcher {
    prompt: Box<dyn PromptStrategy>,
    debugger: Box<dyn DebuggerAttach>,
}

impl Dispatcher {
    /// Dispatcher with the interactive prompt and command-line debuggers.
    pub fn new() -> Self {
        Self {
            prompt: Box::new(StdioPrompt),
            debugger: Box::new(CommandDebugger),
        }
    }

    /// Replace the `Ask` resolution strategy.
    pub fn with_prompt(mut self, prompt: Box<dyn PromptStrategy>) -> Self {
        self.prompt = prompt;
        self
    }

    /// Replace the debugger attach mechanism.
    pub fn with_debugger(mut self, debugger: Box<dyn DebuggerAttach>) -> Self {
        self.debugger = debugger;
        self
    }

    /// Perform the configured exit action for `code`.
    ///
    /// The code's meaning is opaque: recognized categories and arbitrary
    /// caller-defined integers route identically. `Raise` is the sole
    /// value-producing branch; `Terminate` does not return.
    pub fn invoke_exit_action(
        &self,
        policy: &PolicyStore,
        code: i32,
    ) -> Result<Infallible, FatalError> {
        match policy.exit_action() {
            ExitAction::Raise => {
                error!(code, "fatal error raised");
                Err(FatalError::Raised { code })
            }
            ExitAction::Terminate => {
                error!(code, "fatal error, terminating");
                process::exit(code)
            }
        }
    }

    /// Perform the configured debug action for an assertion violation.
    ///
    /// The violation is logged before dispatch. Returns `Ok(())` only for
    /// `Continue`; `Raise` surfaces the violation as a [`FatalError`];
    /// every other branch is terminal.
    pub fn invoke_debug_action(
        &self,
        policy: &PolicyStore,
        violation: AssertionViolation,
    ) -> Result<(), FatalError> {
        error!(
            file = violation.file,
            line = violation.line,
            condition = violation.condition,
            "assertion violation"
        );

        let action = match policy.debug_action() {
            DebugAction::Ask => self.prompt.resolve(&violation.to_string()),
            action => action,
        };

        match action {
            DebugAction::Continue => Ok(()),
            DebugAction::Raise => Err(FatalError::AssertionFailed {
                file: violation.file,
                line: violation.line,
                condition: violation.condition,
            }),
            DebugAction::Stop => process::exit(exit_codes::INTERNAL_FATAL),
            DebugAction::InvokeGdb => {
                self.debugger.attach(DebuggerKind::Gdb);
                process::abort()
            }
            DebugAction::InvokeLldb => {
                self.debugger.attach(DebuggerKind::Lldb);
                process::abort()
            }
            // Abort, and the case where the strategy itself answered Ask
            // and so declined to choose.
            DebugAction::Abort | DebugAction::Ask => process::abort(),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
