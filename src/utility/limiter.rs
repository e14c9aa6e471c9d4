// Standard library
use std::future::Future;
use std::time::Duration;

// 3rd party crates
use tokio::sync::Semaphore;
use tracing::warn;

// Project imports
use crate::providers::errors::ProviderError;

/// Gate every provider call passes through.
///
/// Caps the number of calls in flight at once and abandons any single call
/// that outlives the configured timeout. The timeout clock starts once a
/// permit is held, so waiting in the queue never counts against a call.
pub struct CallLimiter {
    semaphore: Semaphore,
    timeout: Duration,
}

impl CallLimiter {
    pub fn new(max_concurrent_calls: usize, timeout: Duration) -> Self {
        Self {
            semaphore: Semaphore::new(max_concurrent_calls),
            timeout,
        }
    }

    /// Runs `call` once a permit is free, bounded by the per-call timeout.
    pub async fn call<T, F>(&self, operation: &str, call: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| ProviderError::Api {
                operation: operation.to_string(),
                message: format!("call limiter unavailable: {}", e),
            })?;

        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!(operation = %operation, "Provider call timed out");
                Err(ProviderError::Timeout {
                    operation: operation.to_string(),
                    secs: self.timeout.as_secs(),
                })
            }
        }
    }
}
