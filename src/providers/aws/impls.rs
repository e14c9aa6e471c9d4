// 3rd party crates
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_elasticloadbalancing::types::{InstanceState, LoadBalancerDescription};
use aws_sdk_elasticloadbalancingv2::types::{
    LoadBalancer, TargetHealthDescription as SdkTargetHealthDescription,
};
use tracing::trace;

// Project imports
use crate::providers::errors::ProviderError;
use crate::providers::traits::{ApplicationApi, ClassicApi};
use crate::providers::types::{
    DescribeParams, InstanceHealth, LoadBalancerKind, LoadBalancerRecord, Page, TargetGroupRef,
    TargetHealth, TargetHealthDescription,
};

// Current module imports
use super::functions::{
    api_error, application_listing_error, classic_listing_error, instance_health_error,
    target_groups_error,
};
use super::types::{ApplicationClient, ClassicClient};

impl ClassicClient {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_elasticloadbalancing::Client::new(config),
        }
    }
}

impl ApplicationClient {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_elasticloadbalancingv2::Client::new(config),
        }
    }
}

/// Name filter for a describe call; an empty list means "list everything".
fn name_filter(params: &DescribeParams) -> Option<Vec<String>> {
    (!params.names.is_empty()).then(|| params.names.clone())
}

/// Page size is only meaningful (and only accepted) for unfiltered listings.
fn page_size(params: &DescribeParams) -> Option<i32> {
    params.names.is_empty().then_some(params.page_size)
}

impl From<LoadBalancerDescription> for LoadBalancerRecord {
    fn from(description: LoadBalancerDescription) -> Self {
        Self {
            name: description.load_balancer_name.unwrap_or_default(),
            scheme: description.scheme.unwrap_or_default(),
            kind: LoadBalancerKind::Classic,
            lb_type: None,
            arn: None,
            dns_name: description.dns_name,
            states_summary: None,
        }
    }
}

impl From<LoadBalancer> for LoadBalancerRecord {
    fn from(load_balancer: LoadBalancer) -> Self {
        Self {
            name: load_balancer.load_balancer_name.unwrap_or_default(),
            scheme: load_balancer
                .scheme
                .map(|scheme| scheme.as_str().to_string())
                .unwrap_or_default(),
            kind: LoadBalancerKind::Application,
            lb_type: load_balancer.r#type.map(|t| t.as_str().to_string()),
            arn: load_balancer.load_balancer_arn,
            dns_name: load_balancer.dns_name,
            states_summary: None,
        }
    }
}

impl From<InstanceState> for InstanceHealth {
    fn from(state: InstanceState) -> Self {
        Self {
            instance_id: state.instance_id,
            state: state.state,
        }
    }
}

impl From<SdkTargetHealthDescription> for TargetHealthDescription {
    fn from(description: SdkTargetHealthDescription) -> Self {
        Self {
            target_id: description.target.and_then(|target| target.id),
            target_health: description.target_health.map(|health| TargetHealth {
                state: health.state.map(|state| state.as_str().to_string()),
            }),
        }
    }
}

#[async_trait]
impl ClassicApi for ClassicClient {
    async fn describe_load_balancers(
        &self,
        params: DescribeParams,
    ) -> Result<Page<LoadBalancerRecord>, ProviderError> {
        trace!(names = ?params.names, marker = ?params.marker, "elb DescribeLoadBalancers");

        let output = self
            .client
            .describe_load_balancers()
            .set_load_balancer_names(name_filter(&params))
            .set_page_size(page_size(&params))
            .set_marker(params.marker.clone())
            .send()
            .await
            .map_err(|e| classic_listing_error(&params.names, e))?;

        Ok(Page {
            items: output
                .load_balancer_descriptions
                .unwrap_or_default()
                .into_iter()
                .map(LoadBalancerRecord::from)
                .collect(),
            next_marker: output.next_marker,
        })
    }

    async fn describe_instance_health(
        &self,
        name: &str,
    ) -> Result<Vec<InstanceHealth>, ProviderError> {
        trace!(load_balancer = %name, "elb DescribeInstanceHealth");

        let output = self
            .client
            .describe_instance_health()
            .load_balancer_name(name)
            .send()
            .await
            .map_err(|e| instance_health_error(name, e))?;

        Ok(output
            .instance_states
            .unwrap_or_default()
            .into_iter()
            .map(InstanceHealth::from)
            .collect())
    }
}

#[async_trait]
impl ApplicationApi for ApplicationClient {
    async fn describe_load_balancers(
        &self,
        params: DescribeParams,
    ) -> Result<Page<LoadBalancerRecord>, ProviderError> {
        trace!(names = ?params.names, marker = ?params.marker, "elbv2 DescribeLoadBalancers");

        let output = self
            .client
            .describe_load_balancers()
            .set_names(name_filter(&params))
            .set_page_size(page_size(&params))
            .set_marker(params.marker.clone())
            .send()
            .await
            .map_err(|e| application_listing_error(&params.names, e))?;

        Ok(Page {
            items: output
                .load_balancers
                .unwrap_or_default()
                .into_iter()
                .map(LoadBalancerRecord::from)
                .collect(),
            next_marker: output.next_marker,
        })
    }

    async fn describe_target_groups(
        &self,
        load_balancer_arn: &str,
        marker: Option<String>,
    ) -> Result<Page<TargetGroupRef>, ProviderError> {
        trace!(load_balancer_arn = %load_balancer_arn, marker = ?marker, "elbv2 DescribeTargetGroups");

        let output = self
            .client
            .describe_target_groups()
            .load_balancer_arn(load_balancer_arn)
            .set_marker(marker)
            .send()
            .await
            .map_err(|e| target_groups_error(load_balancer_arn, e))?;

        Ok(Page {
            items: output
                .target_groups
                .unwrap_or_default()
                .into_iter()
                .filter_map(|group| group.target_group_arn)
                .map(|arn| TargetGroupRef { arn })
                .collect(),
            next_marker: output.next_marker,
        })
    }

    async fn describe_target_health(
        &self,
        target_group_arn: &str,
    ) -> Result<Vec<TargetHealthDescription>, ProviderError> {
        trace!(target_group_arn = %target_group_arn, "elbv2 DescribeTargetHealth");

        let output = self
            .client
            .describe_target_health()
            .target_group_arn(target_group_arn)
            .send()
            .await
            .map_err(|e| api_error("elbv2:DescribeTargetHealth", e))?;

        Ok(output
            .target_health_descriptions
            .unwrap_or_default()
            .into_iter()
            .map(TargetHealthDescription::from)
            .collect())
    }
}
