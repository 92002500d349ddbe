//! Failure-response policy.
//! Two independently-settable defaults: the exit action for fatal errors
//! and the debug action for assertion failures.

pub mod actions;
pub mod store;

pub use actions::{DebugAction, ExitAction};
pub use store::PolicyStore;
