// 3rd party crates
use serde::Serialize;

/// Which load balancer API generation a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadBalancerKind {
    Classic,
    Application,
}

/// One load balancer as listed by either API generation.
///
/// `states_summary` stays `None` until the enricher fills it in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadBalancerRecord {
    pub name: String,
    pub scheme: String,
    pub kind: LoadBalancerKind,
    /// Provider type for the v2 API (`application`, `network`, `gateway`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub lb_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
    pub states_summary: Option<String>,
}

/// Request parameters for a `describe load balancers` call.
///
/// Built fresh for every listing; the paginator only ever sets `marker`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeParams {
    pub names: Vec<String>,
    pub page_size: i32,
    pub marker: Option<String>,
}

/// One page of a paginated API response.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_marker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetGroupRef {
    pub arn: String,
}

/// Classic API shape: the state sits directly on the instance record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceHealth {
    pub instance_id: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetHealth {
    pub state: Option<String>,
}

/// v2 API shape: the state is nested one level down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetHealthDescription {
    pub target_id: Option<String>,
    pub target_health: Option<TargetHealth>,
}
