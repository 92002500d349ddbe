//! Global on/off switch for assertion evaluation.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::constants::DEFAULT_ASSERTIONS_ENABLED;

/// Switch controlling whether assertion checks are evaluated at all.
///
/// When disabled, gated assertions short-circuit to "no check performed"
/// regardless of the asserted condition's truth value.
#[derive(Debug)]
pub struct AssertionSwitch {
    enabled: AtomicBool,
}

impl AssertionSwitch {
    /// New switch in the default (enabled) state.
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(DEFAULT_ASSERTIONS_ENABLED),
        }
    }

    /// Unconditionally overwrite the switch.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Current switch state.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl Default for AssertionSwitch {
    fn default() -> Self {
        Self::new()
    }
}
