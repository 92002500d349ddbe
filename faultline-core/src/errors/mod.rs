//! Error handling for faultline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod fatal_error;

pub use config_error::ConfigError;
pub use error_code::FaultErrorCode;
pub use fatal_error::FatalError;
