//! The catchable failure produced by fatal dispatch.

use super::error_code::{self, FaultErrorCode};

/// Failure produced when the resolved action is `Raise`.
///
/// This is the sole recoverable path out of the dispatcher: callers unwind
/// via `?` to the nearest enclosing recovery point, or to process exit if
/// none exists.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    #[error("Fatal error (exit code {code})")]
    Raised { code: i32 },

    #[error("Assertion failed at {file}:{line}: {condition}")]
    AssertionFailed {
        file: &'static str,
        line: u32,
        condition: &'static str,
    },
}

impl FatalError {
    /// The exit code this failure would have terminated the process with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Raised { code } => *code,
            Self::AssertionFailed { .. } => crate::exit_codes::INTERNAL_FATAL,
        }
    }
}

impl FaultErrorCode for FatalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Raised { .. } => error_code::FATAL_ERROR,
            Self::AssertionFailed { .. } => error_code::ASSERTION_FAILED,
        }
    }
}
