//! faultline-core: assertion gating, debug tags, and failure-policy dispatch
//!
//! This crate defines the failure-handling contract for the Faultline
//! engine:
//! - Registry: process-wide assertion switch and named debug-tag table
//! - Policy: which action fires on fatal errors and assertion failures
//! - Dispatch: performing the resolved action, with pluggable prompt and
//!   debugger-attach seams
//! - Config: TOML + environment seeding of the initial debug state
//! - Errors: the typed failure raised on the recoverable dispatch path
//! - Trace: tracing/EnvFilter setup
//!
//! All state lives in an explicit [`DebugContext`] owned by the process
//! entry point; there are no hidden globals, and tests construct a fresh
//! context each.

pub mod config;
pub mod constants;
pub mod context;
pub mod dispatch;
pub mod errors;
pub mod exit_codes;
mod macros;
pub mod policy;
pub mod registry;
pub mod trace;

// Re-exports for convenience
pub use config::DebugConfig;
pub use context::DebugContext;
pub use dispatch::{
    AssertionViolation, CommandDebugger, DebuggerAttach, DebuggerKind, Dispatcher,
    PromptStrategy, StdioPrompt,
};
pub use errors::{ConfigError, FatalError, FaultErrorCode};
pub use policy::{DebugAction, ExitAction, PolicyStore};
pub use registry::{AssertionSwitch, TagRegistry};
pub use trace::init_tracing;
