//! Lock-free storage for the two default action settings.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::constants::{DEFAULT_DEBUG_ACTION, DEFAULT_EXIT_ACTION};

use super::{DebugAction, ExitAction};

/// Holds the default exit action and the default debug action.
///
/// The two settings are independent atomics: setters and getters
/// round-trip exactly, repeated sets are harmless, and readers can never
/// observe a torn write.
#[derive(Debug)]
pub struct PolicyStore {
    exit_action: AtomicU8,
    debug_action: AtomicU8,
}

impl PolicyStore {
    /// New store with compiled defaults.
    pub fn new() -> Self {
        Self {
            exit_action: AtomicU8::new(DEFAULT_EXIT_ACTION as u8),
            debug_action: AtomicU8::new(DEFAULT_DEBUG_ACTION as u8),
        }
    }

    /// Overwrite the default exit action.
    pub fn set_exit_action(&self, action: ExitAction) {
        self.exit_action.store(action as u8, Ordering::Relaxed);
    }

    /// Current default exit action.
    pub fn exit_action(&self) -> ExitAction {
        ExitAction::from_u8(self.exit_action.load(Ordering::Relaxed))
    }

    /// Overwrite the default debug action.
    pub fn set_debug_action(&self, action: DebugAction) {
        self.debug_action.store(action as u8, Ordering::Relaxed);
    }

    /// Current default debug action.
    pub fn debug_action(&self) -> DebugAction {
        DebugAction::from_u8(self.debug_action.load(Ordering::Relaxed))
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::new()
    }
}
