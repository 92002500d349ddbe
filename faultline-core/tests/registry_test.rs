//! Tests for the assertion switch and debug-tag registry.

use faultline_core::DebugContext;

/// T0-REG-01: Assertion switch round-trips both states
#[test]
fn test_assertion_switch_round_trip() {
    let ctx = DebugContext::new();
    let initial = ctx.assertions_enabled();

    ctx.set_assertions_enabled(false);
    assert!(!ctx.assertions_enabled());

    ctx.set_assertions_enabled(true);
    assert!(ctx.assertions_enabled());

    // Restore initial state
    ctx.set_assertions_enabled(initial);
    assert_eq!(ctx.assertions_enabled(), initial);
}

/// T0-REG-02: Assertions default to enabled on a fresh context
#[test]
fn test_assertions_enabled_by_default() {
    let ctx = DebugContext::new();
    assert!(ctx.assertions_enabled());
}

/// T0-REG-03: Unknown tags report disabled
#[test]
fn test_unknown_tags_disabled() {
    let ctx = DebugContext::new();
    assert!(!ctx.is_debug_enabled("test_tag"));
    assert!(!ctx.is_debug_enabled("another_tag"));
}

/// T0-REG-04: Enabling one tag leaves others untouched
#[test]
fn test_tag_independence() {
    let ctx = DebugContext::new();

    ctx.enable_debug("test_tag");
    assert!(ctx.is_debug_enabled("test_tag"));
    assert!(!ctx.is_debug_enabled("another_tag"));

    ctx.enable_debug("another_tag");
    assert!(ctx.is_debug_enabled("test_tag"));
    assert!(ctx.is_debug_enabled("another_tag"));

    ctx.disable_debug("test_tag");
    assert!(!ctx.is_debug_enabled("test_tag"));
    assert!(ctx.is_debug_enabled("another_tag"));

    ctx.disable_debug("another_tag");
    assert!(!ctx.is_debug_enabled("test_tag"));
    assert!(!ctx.is_debug_enabled("another_tag"));
}

/// T0-REG-05: Disabling a tag that was never enabled is a no-op
#[test]
fn test_disable_unknown_tag() {
    let ctx = DebugContext::new();
    ctx.disable_debug("non_existent_tag");
    assert!(!ctx.is_debug_enabled("non_existent_tag"));
}

/// T0-REG-06: Enabling a tag is idempotent
#[test]
fn test_enable_idempotent() {
    let ctx = DebugContext::new();
    ctx.enable_debug("repeat");
    ctx.enable_debug("repeat");
    assert!(ctx.is_debug_enabled("repeat"));

    ctx.disable_debug("repeat");
    assert!(!ctx.is_debug_enabled("repeat"));
}

/// T0-REG-07: Interleaved multi-tag scenario (tag1/tag2/tag3)
#[test]
fn test_multiple_tags_interleaved() {
    let ctx = DebugContext::new();

    ctx.enable_debug("tag1");
    ctx.enable_debug("tag2");
    ctx.enable_debug("tag3");

    assert!(ctx.is_debug_enabled("tag1"));
    assert!(ctx.is_debug_enabled("tag2"));
    assert!(ctx.is_debug_enabled("tag3"));

    // Selectively disable the middle tag
    ctx.disable_debug("tag2");

    assert!(ctx.is_debug_enabled("tag1"));
    assert!(!ctx.is_debug_enabled("tag2"));
    assert!(ctx.is_debug_enabled("tag3"));

    ctx.disable_debug("tag1");
    ctx.disable_debug("tag3");

    assert!(!ctx.is_debug_enabled("tag1"));
    assert!(!ctx.is_debug_enabled("tag2"));
    assert!(!ctx.is_debug_enabled("tag3"));
}

/// T0-REG-08: A tag's state depends only on the most recent call for it
#[test]
fn test_last_call_wins() {
    let ctx = DebugContext::new();
    ctx.enable_debug("flip");
    ctx.disable_debug("flip");
    ctx.enable_debug("flip");
    assert!(ctx.is_debug_enabled("flip"));
}

/// T0-REG-09: Finalize discards every tag and recreates lazily
#[test]
fn test_finalize_then_fresh_use() {
    let ctx = DebugContext::new();

    ctx.enable_debug("cleanup_test");
    assert!(ctx.is_debug_enabled("cleanup_test"));

    ctx.finalize_debug();

    // Every previously-enabled tag reports disabled
    assert!(!ctx.is_debug_enabled("cleanup_test"));

    // New and previously-used names both work as on first use
    ctx.enable_debug("after_cleanup");
    assert!(ctx.is_debug_enabled("after_cleanup"));
    ctx.enable_debug("cleanup_test");
    assert!(ctx.is_debug_enabled("cleanup_test"));
}

/// T0-REG-10: Contexts are isolated from each other
#[test]
fn test_context_isolation() {
    let a = DebugContext::new();
    let b = DebugContext::new();

    a.enable_debug("shared_name");
    assert!(a.is_debug_enabled("shared_name"));
    assert!(!b.is_debug_enabled("shared_name"));

    a.set_assertions_enabled(false);
    assert!(b.assertions_enabled());
}
