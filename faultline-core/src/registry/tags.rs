//! Named debug-tag table gating optional instrumentation.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;

/// Mapping from debug-tag name to enabled state.
///
/// Absence of a key is equivalent to "disabled": disabling an unknown tag
/// is a no-op and querying one returns false. Entries are created on first
/// enable and survive until disabled or the table is finalized. Tags are
/// independent; toggling one never affects another.
#[derive(Debug, Default)]
pub struct TagRegistry {
    tags: RwLock<FxHashMap<String, bool>>,
}

impl TagRegistry {
    /// New empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `tag` enabled, creating the entry if absent. Idempotent.
    pub fn enable(&self, tag: &str) {
        self.write().insert(tag.to_owned(), true);
    }

    /// Mark `tag` disabled if present; no-op for unknown tags.
    pub fn disable(&self, tag: &str) {
        if let Some(state) = self.write().get_mut(tag) {
            *state = false;
        }
    }

    /// True iff an entry exists for `tag` and it is enabled.
    pub fn is_enabled(&self, tag: &str) -> bool {
        self.read().get(tag).copied().unwrap_or(false)
    }

    /// Discard the entire table.
    ///
    /// The map is replaced wholesale rather than cleared in place; later
    /// calls observe a table indistinguishable from a freshly created one.
    pub fn finalize(&self) {
        *self.write() = FxHashMap::default();
    }

    // This registry runs inside failure handling: a panic elsewhere must
    // not poison it into unusability.
    fn read(&self) -> RwLockReadGuard<'_, FxHashMap<String, bool>> {
        self.tags.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, FxHashMap<String, bool>> {
        self.tags.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_replaces_the_table() {
        let registry = TagRegistry::new();
        registry.enable("interp");
        registry.disable("interp");
        registry.finalize();

        // No residue: a disabled entry must not survive the reset.
        assert!(!registry.is_enabled("interp"));
        registry.enable("interp");
        assert!(registry.is_enabled("interp"));
    }
}
