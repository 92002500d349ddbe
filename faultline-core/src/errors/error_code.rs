//! FaultErrorCode trait for structured error identification.

/// Trait for attaching a stable code string to faultline errors.
/// Every error enum implements this so embedders can route on the
/// category without string-matching display output.
pub trait FaultErrorCode {
    /// Returns the error code string (e.g., "FATAL_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn code_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const FATAL_ERROR: &str = "FATAL_ERROR";
pub const ASSERTION_FAILED: &str = "ASSERTION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
