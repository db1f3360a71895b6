//! Error handling for Guesswork.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod round_error;
pub mod session_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::GuessworkErrorCode;
pub use round_error::RoundError;
pub use session_error::SessionError;
