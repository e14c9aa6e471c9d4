// Standard library
use std::future::Future;

// 3rd party crates
use futures::future::try_join_all;
use futures::{stream::FuturesUnordered, StreamExt};
use tracing::{debug, error, info};

// Project imports
use crate::providers::errors::ProviderError;
use crate::providers::traits::{ApplicationApi, ClassicApi};
use crate::providers::types::{LoadBalancerRecord, TargetGroupRef, TargetHealthDescription};
use crate::utility::limiter::CallLimiter;

// Current module imports
use super::aggregator::aggregate;
use super::errors::InventoryError;
use super::paginator::fetch_all;
use super::types::{EnrichmentFailure, HealthSummary};

/// Attaches instance health summaries to classic load balancers.
///
/// One health lookup per record, all in flight at once (subject to the
/// limiter). Returns only after every lookup finished; if any failed, the
/// error names every failed record.
pub async fn enrich_classic<C>(
    records: Vec<LoadBalancerRecord>,
    client: &C,
    limiter: &CallLimiter,
) -> Result<Vec<LoadBalancerRecord>, InventoryError>
where
    C: ClassicApi + ?Sized,
{
    let total: usize = records.len();
    let pending = FuturesUnordered::new();

    for mut record in records {
        pending.push(async move {
            let lookup = limiter
                .call(
                    "elb:DescribeInstanceHealth",
                    client.describe_instance_health(&record.name),
                )
                .await;

            match lookup {
                Ok(instances) => {
                    record.states_summary = Some(aggregate(&instances).to_string());
                    Ok(record)
                }
                Err(error) => Err(EnrichmentFailure {
                    name: record.name,
                    error,
                }),
            }
        });
    }

    gather(pending, total).await
}

/// Attaches target health summaries to v2 load balancers.
///
/// Each record's summary aggregates the targets of all of its target groups.
/// A load balancer without target groups gets an empty summary.
pub async fn enrich_application<A>(
    records: Vec<LoadBalancerRecord>,
    client: &A,
    limiter: &CallLimiter,
) -> Result<Vec<LoadBalancerRecord>, InventoryError>
where
    A: ApplicationApi + ?Sized,
{
    let total: usize = records.len();
    let pending = FuturesUnordered::new();

    for mut record in records {
        pending.push(async move {
            match target_health_summary(&record, client, limiter).await {
                Ok(summary) => {
                    record.states_summary = Some(summary.to_string());
                    Ok(record)
                }
                Err(error) => Err(EnrichmentFailure {
                    name: record.name,
                    error,
                }),
            }
        });
    }

    gather(pending, total).await
}

async fn target_health_summary<A>(
    record: &LoadBalancerRecord,
    client: &A,
    limiter: &CallLimiter,
) -> Result<HealthSummary, ProviderError>
where
    A: ApplicationApi + ?Sized,
{
    let Some(arn) = record.arn.as_deref() else {
        debug!(load_balancer = %record.name, "No ARN, skipping target health");
        return Ok(HealthSummary::default());
    };

    let groups: Vec<TargetGroupRef> = fetch_all(
        move |marker: Option<String>| {
            limiter.call(
                "elbv2:DescribeTargetGroups",
                client.describe_target_groups(arn, marker),
            )
        },
        None,
    )
    .await?;

    // Results come back in target group order, keeping first-seen state order stable.
    let per_group: Vec<Vec<TargetHealthDescription>> =
        try_join_all(groups.iter().map(|group| {
            limiter.call(
                "elbv2:DescribeTargetHealth",
                client.describe_target_health(&group.arn),
            )
        }))
        .await?;

    debug!(
        load_balancer = %record.name,
        target_groups = groups.len(),
        "Collected target health"
    );

    Ok(aggregate(per_group.iter().flatten()))
}

/// Waits for every unit of work, keeping each record or its failure.
async fn gather<F>(
    mut pending: FuturesUnordered<F>,
    total: usize,
) -> Result<Vec<LoadBalancerRecord>, InventoryError>
where
    F: Future<Output = Result<LoadBalancerRecord, EnrichmentFailure>>,
{
    let mut enriched: Vec<LoadBalancerRecord> = Vec::with_capacity(total);
    let mut failures: Vec<EnrichmentFailure> = Vec::new();

    while let Some(outcome) = pending.next().await {
        match outcome {
            Ok(record) => {
                debug!(
                    load_balancer = %record.name,
                    states = record.states_summary.as_deref().unwrap_or_default(),
                    "Health summary attached"
                );
                enriched.push(record);
            }
            Err(failure) => {
                error!(
                    load_balancer = %failure.name,
                    error = %failure.error,
                    "Health lookup failed"
                );
                failures.push(failure);
            }
        }
    }

    if failures.is_empty() {
        info!(count = enriched.len(), "Enriched load balancers");
        Ok(enriched)
    } else {
        Err(InventoryError::Enrichment { failures, total })
    }
}
