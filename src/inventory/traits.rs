// Project imports
use crate::providers::types::{DescribeParams, InstanceHealth, TargetHealthDescription};

// Current module imports
#[cfg(test)]
use super::types::HealthRecord;

/// Anything that reports a single health state.
///
/// `None` means the provider omitted the state for that target.
pub trait HealthReport {
    fn state(&self) -> Option<&str>;

    /// Instance or target the state belongs to.
    fn id(&self) -> Option<&str>;
}

impl HealthReport for InstanceHealth {
    fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    fn id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }
}

impl HealthReport for TargetHealthDescription {
    fn id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    fn state(&self) -> Option<&str> {
        self.target_health
            .as_ref()
            .and_then(|health| health.state.as_deref())
    }
}

#[cfg(test)]
impl HealthReport for HealthRecord {
    fn state(&self) -> Option<&str> {
        match self {
            HealthRecord::Instance(instance) => instance.state(),
            HealthRecord::Target(target) => target.state(),
        }
    }

    fn id(&self) -> Option<&str> {
        match self {
            HealthRecord::Instance(instance) => instance.id(),
            HealthRecord::Target(target) => target.id(),
        }
    }
}

impl<T: HealthReport + ?Sized> HealthReport for &T {
    fn state(&self) -> Option<&str> {
        (**self).state()
    }

    fn id(&self) -> Option<&str> {
        (**self).id()
    }
}

/// Request parameters that can carry a continuation marker.
pub trait Paginated: Clone {
    fn set_marker(&mut self, marker: String);
}

impl Paginated for DescribeParams {
    fn set_marker(&mut self, marker: String) {
        self.marker = Some(marker);
    }
}

/// A bare marker, for calls whose other inputs the caller already captured.
impl Paginated for Option<String> {
    fn set_marker(&mut self, marker: String) {
        *self = Some(marker);
    }
}
