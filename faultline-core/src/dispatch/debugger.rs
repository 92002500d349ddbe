//! External debugger attachment.
//!
//! Attach is opaque and terminal: the dispatcher hands control to the
//! external tool and never models resumption at the call site.

use std::process::Command;

use tracing::error;

/// Which external debugger to attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebuggerKind {
    Gdb,
    Lldb,
}

/// Opaque external-debugger attach mechanism.
pub trait DebuggerAttach: Send + Sync {
    /// Attach the given debugger to the current process.
    ///
    /// Returns whether the attach command itself could run; the dispatcher
    /// treats the call as terminal either way.
    fn attach(&self, kind: DebuggerKind) -> bool;
}

/// Attaches by spawning the platform debugger against the current pid.
pub struct CommandDebugger;

impl DebuggerAttach for CommandDebugger {
    fn attach(&self, kind: DebuggerKind) -> bool {
        let pid = std::process::id();
        let status = match kind {
            DebuggerKind::Gdb => Command::new("gdb")
                .arg("-nw")
                .arg(format!("/proc/{pid}/exe"))
                .arg(pid.to_string())
                .status(),
            DebuggerKind::Lldb => Command::new("lldb")
                .arg("-p")
                .arg(pid.to_string())
                .status(),
        };
        match status {
            Ok(status) => status.success(),
            Err(e) => {
                error!(?kind, error = %e, "failed to launch debugger");
                false
            }
        }
    }
}
