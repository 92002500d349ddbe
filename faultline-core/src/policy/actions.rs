//! Action enumerations for fatal and assertion-failure responses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Response to a fatal (non-recoverable) condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum ExitAction {
    /// Produce a catchable [`FatalError`](crate::errors::FatalError)
    /// carrying the exit code.
    Raise = 0,
    /// End the process immediately with the exit code.
    Terminate = 1,
}

impl ExitAction {
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Raise,
            _ => Self::Terminate,
        }
    }

    /// Canonical config-file name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raise => "raise",
            Self::Terminate => "terminate",
        }
    }
}

impl std::fmt::Display for ExitAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExitAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" => Ok(Self::Raise),
            // "exit" kept as an alias for the historical name.
            "terminate" | "exit" => Ok(Self::Terminate),
            other => Err(ConfigError::InvalidAction {
                value: other.to_owned(),
            }),
        }
    }
}

/// Response to an assertion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum DebugAction {
    /// Interactively prompt for one of the other actions.
    Ask = 0,
    /// Log the violation and resume execution.
    Continue = 1,
    /// Terminate immediately via `process::abort`.
    Abort = 2,
    /// Halt for inspection.
    Stop = 3,
    /// Produce a catchable [`FatalError`](crate::errors::FatalError)
    /// carrying the violation.
    Raise = 4,
    /// Attach gdb to the current process.
    InvokeGdb = 5,
    /// Attach lldb to the current process.
    InvokeLldb = 6,
}

impl DebugAction {
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Ask,
            1 => Self::Continue,
            2 => Self::Abort,
            3 => Self::Stop,
            4 => Self::Raise,
            5 => Self::InvokeGdb,
            _ => Self::InvokeLldb,
        }
    }

    /// Canonical config-file name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ask => "ask",
            Self::Continue => "continue",
            Self::Abort => "abort",
            Self::Stop => "stop",
            Self::Raise => "raise",
            Self::InvokeGdb => "invoke-gdb",
            Self::InvokeLldb => "invoke-lldb",
        }
    }
}

impl std::fmt::Display for DebugAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DebugAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ask" => Ok(Self::Ask),
            "continue" | "cont" => Ok(Self::Continue),
            "abort" => Ok(Self::Abort),
            "stop" => Ok(Self::Stop),
            "raise" => Ok(Self::Raise),
            "invoke-gdb" | "gdb" => Ok(Self::InvokeGdb),
            "invoke-lldb" | "lldb" => Ok(Self::InvokeLldb),
            other => Err(ConfigError::InvalidAction {
                value: other.to_owned(),
            }),
        }
    }
}
