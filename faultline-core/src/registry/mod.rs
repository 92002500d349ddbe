//! Assertion switch and debug-tag registry.
//! Process-wide toggles gating checks and optional instrumentation.

pub mod assertions;
pub mod tags;

pub use assertions::AssertionSwitch;
pub use tags::TagRegistry;
