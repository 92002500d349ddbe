//! Shared constants for the faultline debug subsystem.

use crate::policy::{DebugAction, ExitAction};

/// Faultline version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file name, looked up in the given root.
pub const CONFIG_FILE: &str = "faultline.toml";

/// Environment variable controlling log filtering (EnvFilter syntax).
pub const ENV_LOG: &str = "FAULTLINE_LOG";

/// Environment override for the assertion switch (`1`/`0`/`true`/`false`).
pub const ENV_ASSERTIONS: &str = "FAULTLINE_ASSERTIONS";

/// Environment override for the exit action (`raise`/`terminate`).
pub const ENV_EXIT_ACTION: &str = "FAULTLINE_EXIT_ACTION";

/// Environment override for the debug action (`ask`, `continue`, ...).
pub const ENV_DEBUG_ACTION: &str = "FAULTLINE_DEBUG_ACTION";

/// Environment override for startup-enabled debug tags (comma-separated).
pub const ENV_DEBUG_TAGS: &str = "FAULTLINE_DEBUG_TAGS";

/// Assertions are checked unless explicitly disabled.
pub const DEFAULT_ASSERTIONS_ENABLED: bool = true;

/// Default response to fatal errors.
pub const DEFAULT_EXIT_ACTION: ExitAction = ExitAction::Terminate;

/// Default response to assertion failures.
pub const DEFAULT_DEBUG_ACTION: DebugAction = DebugAction::Ask;

/// Unrecognized interactive answers tolerated before falling back to abort.
pub const PROMPT_MAX_RETRIES: u32 = 3;
