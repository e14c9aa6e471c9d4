// Standard library
use std::fmt;

// Project imports
use crate::providers::errors::ProviderError;
#[cfg(test)]
use crate::providers::types::{InstanceHealth, TargetHealthDescription};

/// Either health record shape, for callers that mix both generations.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthRecord {
    Instance(InstanceHealth),
    Target(TargetHealthDescription),
}

/// Count of each health state, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthSummary {
    counts: Vec<(String, usize)>,
}

impl HealthSummary {
    pub fn record(&mut self, state: &str) {
        match self.counts.iter_mut().find(|(seen, _)| seen == state) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((state.to_string(), 1)),
        }
    }

    #[cfg(test)]
    pub fn count(&self, state: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(seen, _)| seen == state)
            .map(|(_, count)| *count)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Renders as `healthy: 2 unhealthy: 1`; empty summaries render as `""`.
impl fmt::Display for HealthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (state, count)) in self.counts.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {}", state, count)?;
        }
        Ok(())
    }
}

/// A load balancer whose health lookup failed.
#[derive(Debug)]
pub struct EnrichmentFailure {
    pub name: String,
    pub error: ProviderError,
}

impl fmt::Display for EnrichmentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.error)
    }
}
