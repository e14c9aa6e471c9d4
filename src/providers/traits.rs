// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::ProviderError;
use super::types::{
    DescribeParams, InstanceHealth, LoadBalancerRecord, Page, TargetGroupRef,
    TargetHealthDescription,
};

/// First-generation (classic) load balancer API.
///
/// Implementations must be shareable across concurrent lookups; every call
/// takes `&self` and no call may depend on a previous one.
#[async_trait]
pub trait ClassicApi: Send + Sync {
    /// Lists classic load balancers, one page per call.
    ///
    /// A non-empty `params.names` is an exact-name lookup that fails with
    /// [`ProviderError::NotFound`] when any name is unknown.
    async fn describe_load_balancers(
        &self,
        params: DescribeParams,
    ) -> Result<Page<LoadBalancerRecord>, ProviderError>;

    /// Health of every instance registered with the named load balancer.
    async fn describe_instance_health(
        &self,
        name: &str,
    ) -> Result<Vec<InstanceHealth>, ProviderError>;
}

/// Second-generation (application, network, gateway) load balancer API.
#[async_trait]
pub trait ApplicationApi: Send + Sync {
    /// Lists v2 load balancers, one page per call.
    ///
    /// A non-empty `params.names` is an exact-name lookup that fails with
    /// [`ProviderError::NotFound`] when any name is unknown.
    async fn describe_load_balancers(
        &self,
        params: DescribeParams,
    ) -> Result<Page<LoadBalancerRecord>, ProviderError>;

    /// One page of the target groups attached to a load balancer.
    async fn describe_target_groups(
        &self,
        load_balancer_arn: &str,
        marker: Option<String>,
    ) -> Result<Page<TargetGroupRef>, ProviderError>;

    async fn describe_target_health(
        &self,
        target_group_arn: &str,
    ) -> Result<Vec<TargetHealthDescription>, ProviderError>;
}
