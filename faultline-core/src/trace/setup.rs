//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::ENV_LOG;

static INIT: Once = Once::new();

/// Initialize the faultline tracing system.
///
/// Reads the `FAULTLINE_LOG` environment variable for per-module levels,
/// e.g. `FAULTLINE_LOG=faultline_core::dispatch=debug,faultline_core::config=warn`,
/// falling back to `faultline=info` when unset or invalid.
///
/// Output goes to stderr: violation reports must not interleave with
/// whatever the embedding process writes to stdout.
///
/// Idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(ENV_LOG)
            .unwrap_or_else(|_| EnvFilter::new("faultline=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
