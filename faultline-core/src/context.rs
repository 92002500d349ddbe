//! Explicit debug-state handle threaded through the engine.

use std::convert::Infallible;

use tracing::debug;

use crate::config::DebugConfig;
use crate::dispatch::{AssertionViolation, Dispatcher};
use crate::errors::FatalError;
use crate::policy::{DebugAction, ExitAction, PolicyStore};
use crate::registry::{AssertionSwitch, TagRegistry};

/// Process-wide debug state: assertion switch, tag registry, action
/// policy, and the dispatcher acting on them.
///
/// Owned by the process entry point and shared (typically as
/// `Arc<DebugContext>`) with every call site that needs it. Nothing here
/// is a hidden global; tests construct a fresh context each.
pub struct DebugContext {
    assertions: AssertionSwitch,
    tags: TagRegistry,
    policy: PolicyStore,
    dispatcher: Dispatcher,
}

impl DebugContext {
    /// Context with compiled defaults: assertions on, `Terminate` on
    /// fatal errors, `Ask` on assertion failures, no tags enabled.
    pub fn new() -> Self {
        Self {
            assertions: AssertionSwitch::new(),
            tags: TagRegistry::new(),
            policy: PolicyStore::new(),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Context seeded from a resolved configuration.
    pub fn from_config(config: &DebugConfig) -> Self {
        let ctx = Self::new();
        ctx.assertions.set_enabled(config.assertions_enabled());
        ctx.policy.set_exit_action(config.exit_action());
        ctx.policy.set_debug_action(config.debug_action());
        for tag in config.seed_tags() {
            ctx.tags.enable(tag);
        }
        ctx
    }

    /// Swap the dispatcher (prompt/debugger seams).
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    // ---- Assertion Switch ----

    /// Unconditionally overwrite the assertion switch.
    pub fn set_assertions_enabled(&self, enabled: bool) {
        debug!(enabled, "assertion switch set");
        self.assertions.set_enabled(enabled);
    }

    /// Whether assertion checks are evaluated at all.
    pub fn assertions_enabled(&self) -> bool {
        self.assertions.is_enabled()
    }

    // ---- Tag Registry ----

    /// Register `tag` as enabled.
    pub fn enable_debug(&self, tag: &str) {
        self.tags.enable(tag);
    }

    /// Mark `tag` disabled; no-op for unknown tags.
    pub fn disable_debug(&self, tag: &str) {
        self.tags.disable(tag);
    }

    /// Whether `tag` is currently enabled.
    pub fn is_debug_enabled(&self, tag: &str) -> bool {
        self.tags.is_enabled(tag)
    }

    /// Clear the tag registry; later enables work as on first use.
    pub fn finalize_debug(&self) {
        self.tags.finalize();
    }

    // ---- Action Policy ----

    pub fn set_default_exit_action(&self, action: ExitAction) {
        debug!(%action, "default exit action set");
        self.policy.set_exit_action(action);
    }

    pub fn default_exit_action(&self) -> ExitAction {
        self.policy.exit_action()
    }

    pub fn set_default_debug_action(&self, action: DebugAction) {
        debug!(%action, "default debug action set");
        self.policy.set_debug_action(action);
    }

    pub fn default_debug_action(&self) -> DebugAction {
        self.policy.debug_action()
    }

    // ---- Dispatch ----

    /// Perform the configured exit action for `code`.
    /// See [`Dispatcher::invoke_exit_action`].
    pub fn invoke_exit_action(&self, code: i32) -> Result<Infallible, FatalError> {
        self.dispatcher.invoke_exit_action(&self.policy, code)
    }

    /// Perform the configured debug action for `violation`.
    /// See [`Dispatcher::invoke_debug_action`].
    pub fn invoke_debug_action(
        &self,
        violation: AssertionViolation,
    ) -> Result<(), FatalError> {
        self.dispatcher.invoke_debug_action(&self.policy, violation)
    }
}

impl Default for DebugContext {
    fn default() -> Self {
        Self::new()
    }
}
