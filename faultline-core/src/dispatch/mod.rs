//! Fatal-error and assertion-failure dispatch.
//! Resolves the configured action and performs it; terminal branches never
//! return control to the call site.

pub mod debugger;
pub mod dispatcher;
pub mod prompt;

pub use debugger::{CommandDebugger, DebuggerAttach, DebuggerKind};
pub use dispatcher::{AssertionViolation, Dispatcher};
pub use prompt::{PromptStrategy, StdioPrompt};
