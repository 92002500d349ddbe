//! Initial debug-state configuration.
//! TOML-based with environment overrides: env > project file > defaults.

pub mod debug_config;

pub use debug_config::{ActionsConfig, AssertionsConfig, DebugConfig, TagsConfig};
