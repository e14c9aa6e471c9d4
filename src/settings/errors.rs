// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Page size must be between 1 and {max}, got {got}")]
    InvalidPageSize { got: i32, max: i32 },
    #[error("Maximum concurrent calls must be between 1 and {max}, got {got}")]
    InvalidConcurrency { got: usize, max: usize },
    #[error("Call timeout must be greater than 0 seconds")]
    InvalidCallTimeout,
}
