// 3rd party crates
use thiserror::Error;

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An exact-name lookup matched nothing in that generation.
    NotFound,
    /// Anything else: throttling, permissions, timeouts, transport.
    Other,
}

/// Error returned by any load balancer API call.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No load balancer named '{0}'")]
    NotFound(String),

    #[error("{operation} was throttled: {message}")]
    Throttled { operation: String, message: String },

    #[error("{operation} timed out after {secs} seconds")]
    Timeout { operation: String, secs: u64 },

    #[error("{operation} failed: {message}")]
    Api { operation: String, message: String },
}

impl ProviderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProviderError::NotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No AWS region configured; pass --region or set AWS_REGION")]
    NoRegion,
}
