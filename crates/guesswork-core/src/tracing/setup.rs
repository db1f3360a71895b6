//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants;

static INIT: Once = Once::new();

/// Initialize the Guesswork tracing/logging system.
///
/// Reads `GUESSWORK_LOG` for per-crate log levels, e.g.
/// `GUESSWORK_LOG=guesswork_engine=debug,guesswork_session=info`.
/// Falls back to `guesswork=info` if unset or invalid.
///
/// Idempotent. If the host already installed a global subscriber, this is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("guesswork=info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
