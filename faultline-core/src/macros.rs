//! Call-site assertion and instrumentation macros.
//!
//! Every macro takes the debug context as its first argument; nothing
//! here reaches for hidden global state.

/// Checked assertion gated on the context's assertion switch.
///
/// Evaluates to `Result<(), FatalError>`: `Ok(())` when the switch is
/// off, the condition holds, or the configured debug action is
/// `Continue`; `Err` when the action is `Raise`. Other actions do not
/// return.
///
/// The condition is not evaluated while the switch is off.
///
/// ```ignore
/// fault_assert!(ctx, queue.len() <= capacity)?;
/// ```
#[macro_export]
macro_rules! fault_assert {
    ($ctx:expr, $cond:expr $(,)?) => {
        if $ctx.assertions_enabled() && !$cond {
            $ctx.invoke_debug_action($crate::dispatch::AssertionViolation {
                file: file!(),
                line: line!(),
                condition: stringify!($cond),
            })
        } else {
            Ok(())
        }
    };
}

/// Tag-gated assertion: checked only when both the assertion switch and
/// the named debug tag are enabled.
#[macro_export]
macro_rules! fault_assert_tag {
    ($ctx:expr, $tag:expr, $cond:expr $(,)?) => {
        if $ctx.assertions_enabled() && $ctx.is_debug_enabled($tag) && !$cond {
            $ctx.invoke_debug_action($crate::dispatch::AssertionViolation {
                file: file!(),
                line: line!(),
                condition: stringify!($cond),
            })
        } else {
            Ok(())
        }
    };
}

/// Run a block only when `tag` is enabled in the registry.
///
/// ```ignore
/// debug_scope!(ctx, "solver", {
///     dump_state(&solver);
/// });
/// ```
#[macro_export]
macro_rules! debug_scope {
    ($ctx:expr, $tag:expr, $body:block) => {
        if $ctx.is_debug_enabled($tag) {
            $body
        }
    };
}

/// Dispatch the configured exit action for an unreachable code path.
///
/// Evaluates to `Result<T, FatalError>` for any `T` (the success branch
/// is uninhabited), so `return fatal_unreachable!(ctx);` type-checks in
/// any function returning `Result<_, FatalError>`. `Terminate` does not
/// return.
#[macro_export]
macro_rules! fatal_unreachable {
    ($ctx:expr $(,)?) => {
        $ctx.invoke_exit_action($crate::exit_codes::UNREACHABLE)
            .map(|never| match never {})
    };
}

/// Dispatch the configured exit action for not-yet-implemented
/// functionality. Same shape as [`fatal_unreachable!`].
#[macro_export]
macro_rules! fatal_todo {
    ($ctx:expr $(,)?) => {
        $ctx.invoke_exit_action($crate::exit_codes::NOT_IMPLEMENTED)
            .map(|never| match never {})
    };
}
