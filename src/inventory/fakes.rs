//! In-memory stand-ins for both load balancer APIs.

// Standard library
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::providers::errors::ProviderError;
use crate::providers::traits::{ApplicationApi, ClassicApi};
use crate::providers::types::{
    DescribeParams, InstanceHealth, LoadBalancerKind, LoadBalancerRecord, Page, TargetGroupRef,
    TargetHealth, TargetHealthDescription,
};
use crate::utility::limiter::CallLimiter;

pub fn limiter() -> CallLimiter {
    CallLimiter::new(4, Duration::from_secs(5))
}

pub fn classic(name: &str) -> LoadBalancerRecord {
    LoadBalancerRecord {
        name: name.to_string(),
        scheme: "internet-facing".to_string(),
        kind: LoadBalancerKind::Classic,
        lb_type: None,
        arn: None,
        dns_name: Some(format!("{}-123.us-east-1.elb.amazonaws.com", name)),
        states_summary: None,
    }
}

pub fn application(name: &str) -> LoadBalancerRecord {
    LoadBalancerRecord {
        name: name.to_string(),
        scheme: "internal".to_string(),
        kind: LoadBalancerKind::Application,
        lb_type: Some("application".to_string()),
        arn: Some(lb_arn(name)),
        dns_name: Some(format!("internal-{}-456.us-east-1.elb.amazonaws.com", name)),
        states_summary: None,
    }
}

pub fn lb_arn(name: &str) -> String {
    format!(
        "arn:aws:elasticloadbalancing:us-east-1:123456789012:loadbalancer/app/{}/50dc6c495c0c9188",
        name
    )
}

pub fn tg_arn(name: &str) -> String {
    format!(
        "arn:aws:elasticloadbalancing:us-east-1:123456789012:targetgroup/{}/73e2d6bc24d8a067",
        name
    )
}

pub fn instance(state: &str) -> InstanceHealth {
    InstanceHealth {
        instance_id: Some("i-0123456789abcdef0".to_string()),
        state: Some(state.to_string()),
    }
}

pub fn target(state: &str) -> TargetHealthDescription {
    TargetHealthDescription {
        target_id: Some("i-0fedcba9876543210".to_string()),
        target_health: Some(TargetHealth {
            state: Some(state.to_string()),
        }),
    }
}

fn api_error(operation: &str) -> ProviderError {
    ProviderError::Api {
        operation: operation.to_string(),
        message: "ServiceUnavailable".to_string(),
    }
}

/// Splits `records` into pages chained by `page-N` markers.
fn paged(records: &[LoadBalancerRecord], per_page: usize) -> Vec<Page<LoadBalancerRecord>> {
    let chunks: Vec<&[LoadBalancerRecord]> = records.chunks(per_page.max(1)).collect();
    let last: usize = chunks.len().saturating_sub(1);
    chunks
        .into_iter()
        .enumerate()
        .map(|(idx, chunk)| Page {
            items: chunk.to_vec(),
            next_marker: (idx < last).then(|| format!("page-{}", idx + 1)),
        })
        .collect()
}

/// Serves one listing page, or an exact-name lookup when names are given.
fn describe(
    operation: &str,
    records: &[LoadBalancerRecord],
    per_page: usize,
    params: &DescribeParams,
    fail_exact: bool,
) -> Result<Page<LoadBalancerRecord>, ProviderError> {
    if !params.names.is_empty() {
        if fail_exact {
            return Err(api_error(operation));
        }
        let matches: Vec<LoadBalancerRecord> = records
            .iter()
            .filter(|record| params.names.contains(&record.name))
            .cloned()
            .collect();
        if matches.is_empty() {
            return Err(ProviderError::NotFound(params.names.join(",")));
        }
        return Ok(Page {
            items: matches,
            next_marker: None,
        });
    }

    let index: usize = params
        .marker
        .as_deref()
        .and_then(|marker| marker.strip_prefix("page-"))
        .and_then(|n| n.parse().ok())
        .unwrap_or(0);

    Ok(paged(records, per_page)
        .into_iter()
        .nth(index)
        .unwrap_or(Page {
            items: Vec::new(),
            next_marker: None,
        }))
}

fn describe_call_label(prefix: &str, params: &DescribeParams) -> String {
    if params.names.is_empty() {
        format!("{}:list:{}", prefix, params.marker.as_deref().unwrap_or("-"))
    } else {
        format!("{}:exact:{}", prefix, params.names.join(","))
    }
}

#[derive(Default)]
pub struct FakeClassic {
    pub records: Vec<LoadBalancerRecord>,
    pub per_page: usize,
    pub instance_health: HashMap<String, Vec<InstanceHealth>>,
    pub failing_health: HashSet<String>,
    pub fail_exact: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeClassic {
    pub fn with_records(records: Vec<LoadBalancerRecord>) -> Self {
        Self {
            records,
            per_page: 2,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClassicApi for FakeClassic {
    async fn describe_load_balancers(
        &self,
        params: DescribeParams,
    ) -> Result<Page<LoadBalancerRecord>, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(describe_call_label("elb", &params));
        describe(
            "elb:DescribeLoadBalancers",
            &self.records,
            self.per_page,
            &params,
            self.fail_exact,
        )
    }

    async fn describe_instance_health(
        &self,
        name: &str,
    ) -> Result<Vec<InstanceHealth>, ProviderError> {
        self.calls.lock().unwrap().push(format!("elb:health:{}", name));
        // Yield so concurrent lookups genuinely interleave.
        tokio::task::yield_now().await;
        if self.failing_health.contains(name) {
            return Err(api_error("elb:DescribeInstanceHealth"));
        }
        Ok(self.instance_health.get(name).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct FakeApplication {
    pub records: Vec<LoadBalancerRecord>,
    pub per_page: usize,
    /// Target group ARNs per load balancer ARN, one inner `Vec` per page.
    pub target_groups: HashMap<String, Vec<Vec<String>>>,
    pub target_health: HashMap<String, Vec<TargetHealthDescription>>,
    pub failing_target_groups: HashSet<String>,
    pub fail_exact: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApplication {
    pub fn with_records(records: Vec<LoadBalancerRecord>) -> Self {
        Self {
            records,
            per_page: 2,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApplicationApi for FakeApplication {
    async fn describe_load_balancers(
        &self,
        params: DescribeParams,
    ) -> Result<Page<LoadBalancerRecord>, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(describe_call_label("elbv2", &params));
        describe(
            "elbv2:DescribeLoadBalancers",
            &self.records,
            self.per_page,
            &params,
            self.fail_exact,
        )
    }

    async fn describe_target_groups(
        &self,
        load_balancer_arn: &str,
        marker: Option<String>,
    ) -> Result<Page<TargetGroupRef>, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("elbv2:target-groups:{}", load_balancer_arn));
        tokio::task::yield_now().await;

        let pages: Vec<Vec<String>> = self
            .target_groups
            .get(load_balancer_arn)
            .cloned()
            .unwrap_or_default();
        let index: usize = marker.and_then(|m| m.parse().ok()).unwrap_or(0);
        let arns: Vec<String> = pages.get(index).cloned().unwrap_or_default();

        Ok(Page {
            items: arns.into_iter().map(|arn| TargetGroupRef { arn }).collect(),
            next_marker: (index + 1 < pages.len()).then(|| (index + 1).to_string()),
        })
    }

    async fn describe_target_health(
        &self,
        target_group_arn: &str,
    ) -> Result<Vec<TargetHealthDescription>, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("elbv2:target-health:{}", target_group_arn));
        tokio::task::yield_now().await;
        if self.failing_target_groups.contains(target_group_arn) {
            return Err(api_error("elbv2:DescribeTargetHealth"));
        }
        Ok(self
            .target_health
            .get(target_group_arn)
            .cloned()
            .unwrap_or_default())
    }
}
