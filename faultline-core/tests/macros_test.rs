//! Tests for the call-site assertion and instrumentation macros.

use std::cell::Cell;

use faultline_core::{
    debug_scope, exit_codes, fatal_todo, fatal_unreachable, fault_assert,
    fault_assert_tag, DebugAction, DebugContext, ExitAction, FatalError,
};

fn raising_ctx() -> DebugContext {
    let ctx = DebugContext::new();
    ctx.set_default_exit_action(ExitAction::Raise);
    ctx.set_default_debug_action(DebugAction::Raise);
    ctx
}

/// T0-MAC-01: A holding assertion is silent
#[test]
fn test_fault_assert_holds() {
    let ctx = raising_ctx();
    let result: Result<(), FatalError> = fault_assert!(ctx, 1 + 1 == 2);
    assert!(result.is_ok());
}

/// T0-MAC-02: A failing assertion dispatches with the condition text
#[test]
fn test_fault_assert_fails() {
    let ctx = raising_ctx();
    let result: Result<(), FatalError> = fault_assert!(ctx, 1 + 1 == 3);
    match result.unwrap_err() {
        FatalError::AssertionFailed { condition, .. } => {
            assert_eq!(condition, "1 + 1 == 3");
        }
        other => panic!("expected AssertionFailed, got {other}"),
    }
}

/// T0-MAC-03: The condition is not evaluated while the switch is off
#[test]
fn test_fault_assert_short_circuits_when_disabled() {
    let ctx = raising_ctx();
    ctx.set_assertions_enabled(false);

    let evaluations = Cell::new(0u32);
    let result: Result<(), FatalError> = fault_assert!(ctx, {
        evaluations.set(evaluations.get() + 1);
        false
    });

    assert!(result.is_ok());
    assert_eq!(evaluations.get(), 0);

    // Re-enabling makes the same assertion fire again
    ctx.set_assertions_enabled(true);
    let result: Result<(), FatalError> = fault_assert!(ctx, {
        evaluations.set(evaluations.get() + 1);
        false
    });
    assert!(result.is_err());
    assert_eq!(evaluations.get(), 1);
}

/// T0-MAC-04: Continue action makes failing assertions non-fatal
#[test]
fn test_fault_assert_continue() {
    let ctx = DebugContext::new();
    ctx.set_default_debug_action(DebugAction::Continue);

    let result: Result<(), FatalError> = fault_assert!(ctx, false);
    assert!(result.is_ok());
}

/// T0-MAC-05: Tag-gated assertions only fire for enabled tags
#[test]
fn test_fault_assert_tag_gating() {
    let ctx = raising_ctx();

    // Tag disabled: no check, even though the condition is false
    let result: Result<(), FatalError> = fault_assert_tag!(ctx, "solver", false);
    assert!(result.is_ok());

    ctx.enable_debug("solver");
    let result: Result<(), FatalError> = fault_assert_tag!(ctx, "solver", false);
    assert!(result.is_err());

    // Other tags stay ungated
    let result: Result<(), FatalError> = fault_assert_tag!(ctx, "gc", false);
    assert!(result.is_ok());
}

/// T0-MAC-06: Tag-gated assertions also honor the assertion switch
#[test]
fn test_fault_assert_tag_honors_switch() {
    let ctx = raising_ctx();
    ctx.enable_debug("solver");
    ctx.set_assertions_enabled(false);

    let result: Result<(), FatalError> = fault_assert_tag!(ctx, "solver", false);
    assert!(result.is_ok());
}

/// T0-MAC-07: debug_scope runs its block only when the tag is enabled
#[test]
fn test_debug_scope() {
    let ctx = DebugContext::new();
    let runs = Cell::new(0u32);

    debug_scope!(ctx, "interp", {
        runs.set(runs.get() + 1);
    });
    assert_eq!(runs.get(), 0);

    ctx.enable_debug("interp");
    debug_scope!(ctx, "interp", {
        runs.set(runs.get() + 1);
    });
    assert_eq!(runs.get(), 1);
}

/// T0-MAC-08: fatal_unreachable raises with the unreachable code
#[test]
fn test_fatal_unreachable() {
    let ctx = raising_ctx();
    let result: Result<u32, FatalError> = fatal_unreachable!(ctx);
    assert_eq!(result.unwrap_err().exit_code(), exit_codes::UNREACHABLE);
}

/// T0-MAC-09: fatal_todo raises with the not-implemented code
#[test]
fn test_fatal_todo() {
    let ctx = raising_ctx();
    let result: Result<String, FatalError> = fatal_todo!(ctx);
    assert_eq!(result.unwrap_err().exit_code(), exit_codes::NOT_IMPLEMENTED);
}

/// T0-MAC-10: Macros propagate cleanly with `?`
#[test]
fn test_macro_propagation() {
    fn guarded(ctx: &DebugContext, value: u32) -> Result<u32, FatalError> {
        fault_assert!(ctx, value < 100)?;
        Ok(value * 2)
    }

    let ctx = raising_ctx();
    assert_eq!(guarded(&ctx, 3).unwrap(), 6);
    assert!(guarded(&ctx, 500).is_err());
}
