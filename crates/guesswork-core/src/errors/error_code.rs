//! GuessworkErrorCode trait for host-boundary conversion.

/// Stable error codes for hosts that surface errors as strings.
/// Every error enum implements this.
pub trait GuessworkErrorCode {
    /// Returns the error code string (e.g., "CATALOG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const NO_CURRENT_QUESTION: &str = "NO_CURRENT_QUESTION";
pub const CATALOG_EXHAUSTED: &str = "CATALOG_EXHAUSTED";
pub const INVALID_ANSWER: &str = "INVALID_ANSWER";
pub const SESSION_ERROR: &str = "SESSION_ERROR";
