//! Shared constants for the Guesswork matching engine.

/// Guesswork version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default confidence margin (top score minus runner-up) that triggers an early guess.
pub const DEFAULT_MARGIN_THRESHOLD: f64 = 4.0;

/// Default safety cap on questions dispensed per round.
pub const DEFAULT_MAX_QUESTIONS: usize = 20;

/// Default size of the leading set used to rank candidate questions.
pub const DEFAULT_LEADING_SET_SIZE: usize = 3;

/// Default minimum number of tested properties on which any two items must differ.
pub const DEFAULT_MIN_PROPERTY_DIFFERENCES: usize = 2;

/// Success steps an item carries when it has any.
pub const SUCCESS_STEP_COUNT: usize = 5;

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "guesswork.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "GUESSWORK_";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "GUESSWORK_LOG";
