//! Debug-subsystem configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants;
use crate::errors::ConfigError;
use crate::policy::{DebugAction, ExitAction};

/// Initial debug-subsystem state.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FAULTLINE_*`)
/// 2. Project config (`faultline.toml` in `root`)
/// 3. Compiled defaults
///
/// The config layer only *seeds* a [`DebugContext`](crate::DebugContext);
/// runtime mutations are never written back.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DebugConfig {
    pub assertions: AssertionsConfig,
    pub actions: ActionsConfig,
    pub tags: TagsConfig,
}

/// `[assertions]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssertionsConfig {
    /// Whether assertion checks are evaluated. Default: true.
    pub enabled: Option<bool>,
}

/// `[actions]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ActionsConfig {
    /// Response to fatal errors: "raise" | "terminate".
    /// Default: "terminate".
    pub exit: Option<ExitAction>,
    /// Response to assertion failures: "ask" | "continue" | "abort" |
    /// "stop" | "raise" | "invoke-gdb" | "invoke-lldb". Default: "ask".
    pub debug: Option<DebugAction>,
}

/// `[tags]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TagsConfig {
    /// Tags enabled at startup.
    pub enabled: Vec<String>,
}

impl DebugConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`FAULTLINE_*`)
    /// 2. Project config (`faultline.toml` in `root`)
    /// 3. Compiled defaults
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_path = root.join(constants::CONFIG_FILE);
        if project_path.exists() {
            let content = std::fs::read_to_string(&project_path).map_err(|_| {
                ConfigError::FileNotFound {
                    path: project_path.display().to_string(),
                }
            })?;
            let file_config: DebugConfig =
                toml::from_str(&content).map_err(|e| ConfigError::Parse {
                    path: project_path.display().to_string(),
                    message: e.to_string(),
                })?;
            Self::merge(&mut config, &file_config);
        }

        Self::apply_env_overrides(&mut config);

        config.validate()?;
        Ok(config)
    }

    /// Parse from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_owned(),
            message: e.to_string(),
        })
    }

    /// Validate resolved values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for tag in &self.tags.enabled {
            if tag.trim().is_empty() {
                return Err(ConfigError::Validation {
                    field: "tags.enabled".to_owned(),
                    message: "tag names must be non-empty".to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values win only when set.
    fn merge(base: &mut DebugConfig, other: &DebugConfig) {
        if other.assertions.enabled.is_some() {
            base.assertions.enabled = other.assertions.enabled;
        }
        if other.actions.exit.is_some() {
            base.actions.exit = other.actions.exit;
        }
        if other.actions.debug.is_some() {
            base.actions.debug = other.actions.debug;
        }
        if !other.tags.enabled.is_empty() {
            base.tags.enabled = other.tags.enabled.clone();
        }
    }

    /// Apply environment overrides.
    /// `FAULTLINE_ASSERTIONS=0|1|true|false`,
    /// `FAULTLINE_EXIT_ACTION=raise`, `FAULTLINE_DEBUG_ACTION=continue`,
    /// `FAULTLINE_DEBUG_TAGS=interp,gc,solver`.
    /// Unparseable values are logged and skipped, never fatal.
    fn apply_env_overrides(config: &mut DebugConfig) {
        if let Ok(val) = std::env::var(constants::ENV_ASSERTIONS) {
            match parse_bool(&val) {
                Some(v) => config.assertions.enabled = Some(v),
                None => warn!(value = %val, "ignoring unparseable FAULTLINE_ASSERTIONS"),
            }
        }
        if let Ok(val) = std::env::var(constants::ENV_EXIT_ACTION) {
            match val.parse::<ExitAction>() {
                Ok(v) => config.actions.exit = Some(v),
                Err(_) => warn!(value = %val, "ignoring unknown FAULTLINE_EXIT_ACTION"),
            }
        }
        if let Ok(val) = std::env::var(constants::ENV_DEBUG_ACTION) {
            match val.parse::<DebugAction>() {
                Ok(v) => config.actions.debug = Some(v),
                Err(_) => warn!(value = %val, "ignoring unknown FAULTLINE_DEBUG_ACTION"),
            }
        }
        if let Ok(val) = std::env::var(constants::ENV_DEBUG_TAGS) {
            let tags: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_owned)
                .collect();
            if !tags.is_empty() {
                config.tags.enabled = tags;
            }
        }
    }

    // ---- Effective accessors ----

    /// Effective assertion switch state.
    pub fn assertions_enabled(&self) -> bool {
        self.assertions
            .enabled
            .unwrap_or(constants::DEFAULT_ASSERTIONS_ENABLED)
    }

    /// Effective exit action.
    pub fn exit_action(&self) -> ExitAction {
        self.actions.exit.unwrap_or(constants::DEFAULT_EXIT_ACTION)
    }

    /// Effective debug action.
    pub fn debug_action(&self) -> DebugAction {
        self.actions.debug.unwrap_or(constants::DEFAULT_DEBUG_ACTION)
    }

    /// Tags to enable at startup.
    pub fn seed_tags(&self) -> &[String] {
        &self.tags.enabled
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
