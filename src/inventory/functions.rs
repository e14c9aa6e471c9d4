// 3rd party crates
use tracing::info;

// Project imports
use crate::providers::traits::{ApplicationApi, ClassicApi};
use crate::providers::types::{LoadBalancerKind, LoadBalancerRecord};
use crate::utility::limiter::CallLimiter;

// Current module imports
use super::enricher::{enrich_application, enrich_classic};
use super::errors::InventoryError;
use super::resolver::resolve;

/// Resolves, enriches and merges load balancers from both API generations.
///
/// Both generations are enriched concurrently and both must finish before
/// anything is returned. Every returned record carries a health summary.
/// An empty result is a valid outcome, not an error.
pub async fn list_load_balancers<C, A>(
    name: Option<&str>,
    classic: &C,
    application: &A,
    limiter: &CallLimiter,
    page_size: i32,
) -> Result<Vec<LoadBalancerRecord>, InventoryError>
where
    C: ClassicApi + ?Sized,
    A: ApplicationApi + ?Sized,
{
    let resolved: Vec<LoadBalancerRecord> =
        resolve(name, classic, application, limiter, page_size).await?;

    let (classic_records, application_records): (Vec<_>, Vec<_>) = resolved
        .into_iter()
        .partition(|record| record.kind == LoadBalancerKind::Classic);

    info!(
        classic = classic_records.len(),
        application = application_records.len(),
        "Fetching health states"
    );

    let (classic_outcome, application_outcome) = tokio::join!(
        enrich_classic(classic_records, classic, limiter),
        enrich_application(application_records, application, limiter),
    );

    match (classic_outcome, application_outcome) {
        (Ok(mut records), Ok(more)) => {
            records.extend(more);
            Ok(records)
        }
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        (Err(e), Err(other)) => Err(e.merge(other)),
    }
}
