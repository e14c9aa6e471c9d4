// 3rd party crates
use tracing::{debug, info};

// Project imports
use crate::providers::errors::ProviderError;
use crate::providers::traits::{ApplicationApi, ClassicApi};
use crate::providers::types::{DescribeParams, LoadBalancerRecord};
use crate::utility::limiter::CallLimiter;

// Current module imports
use super::paginator::fetch_all;

/// Finds the load balancers to report on.
///
/// Without a name, lists both generations in full (classic first). With a
/// name, tries an exact lookup against the classic API, then the v2 API,
/// returning the first hit alone. Only when both report not-found does it
/// fall back to every listed load balancer whose name contains `name`.
/// Errors other than not-found are returned as-is.
pub async fn resolve<C, A>(
    name: Option<&str>,
    classic: &C,
    application: &A,
    limiter: &CallLimiter,
    page_size: i32,
) -> Result<Vec<LoadBalancerRecord>, ProviderError>
where
    C: ClassicApi + ?Sized,
    A: ApplicationApi + ?Sized,
{
    let Some(name) = name else {
        return list_all(classic, application, limiter, page_size).await;
    };

    let exact: DescribeParams = DescribeParams {
        names: vec![name.to_string()],
        page_size,
        marker: None,
    };

    let classic_lookup = fetch_all(
        move |params: DescribeParams| {
            limiter.call(
                "elb:DescribeLoadBalancers",
                classic.describe_load_balancers(params),
            )
        },
        exact.clone(),
    )
    .await;
    if let Some(records) = exact_hit(classic_lookup)? {
        info!(name = %name, "Exact match among classic load balancers");
        return Ok(records);
    }

    let application_lookup = fetch_all(
        move |params: DescribeParams| {
            limiter.call(
                "elbv2:DescribeLoadBalancers",
                application.describe_load_balancers(params),
            )
        },
        exact,
    )
    .await;
    if let Some(records) = exact_hit(application_lookup)? {
        info!(name = %name, "Exact match among v2 load balancers");
        return Ok(records);
    }

    debug!(name = %name, "No exact match, filtering full listing");
    let matches: Vec<LoadBalancerRecord> = list_all(classic, application, limiter, page_size)
        .await?
        .into_iter()
        .filter(|record| record.name.contains(name))
        .collect();

    info!(name = %name, count = matches.len(), "Substring matches");
    Ok(matches)
}

/// `Some(records)` on a match, `None` when the lookup found nothing.
fn exact_hit(
    lookup: Result<Vec<LoadBalancerRecord>, ProviderError>,
) -> Result<Option<Vec<LoadBalancerRecord>>, ProviderError> {
    match lookup {
        Ok(records) if records.is_empty() => Ok(None),
        Ok(records) => Ok(Some(records)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

async fn list_all<C, A>(
    classic: &C,
    application: &A,
    limiter: &CallLimiter,
    page_size: i32,
) -> Result<Vec<LoadBalancerRecord>, ProviderError>
where
    C: ClassicApi + ?Sized,
    A: ApplicationApi + ?Sized,
{
    let listing = || DescribeParams {
        names: Vec::new(),
        page_size,
        marker: None,
    };

    let mut records: Vec<LoadBalancerRecord> = fetch_all(
        move |params: DescribeParams| {
            limiter.call(
                "elb:DescribeLoadBalancers",
                classic.describe_load_balancers(params),
            )
        },
        listing(),
    )
    .await?;
    debug!(count = records.len(), "Listed classic load balancers");

    let v2: Vec<LoadBalancerRecord> = fetch_all(
        move |params: DescribeParams| {
            limiter.call(
                "elbv2:DescribeLoadBalancers",
                application.describe_load_balancers(params),
            )
        },
        listing(),
    )
    .await?;
    debug!(count = v2.len(), "Listed v2 load balancers");

    records.extend(v2);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::fakes::{application, classic, limiter, FakeApplication, FakeClassic};

    fn names(records: &[LoadBalancerRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn fixtures() -> (FakeClassic, FakeApplication) {
        let classic_client = FakeClassic::with_records(vec![
            classic("legacy-web"),
            classic("legacy-api"),
            classic("batch"),
        ]);
        let application_client = FakeApplication::with_records(vec![
            application("web-frontend"),
            application("api-gateway"),
            application("internal-api"),
        ]);
        (classic_client, application_client)
    }

    #[tokio::test]
    async fn no_name_lists_both_generations_classic_first() {
        let (classic_client, application_client) = fixtures();

        let records = resolve(None, &classic_client, &application_client, &limiter(), 2)
            .await
            .unwrap();

        assert_eq!(
            names(&records),
            vec![
                "legacy-web",
                "legacy-api",
                "batch",
                "web-frontend",
                "api-gateway",
                "internal-api"
            ]
        );
        assert_eq!(
            classic_client.calls(),
            vec!["elb:list:-", "elb:list:page-1"]
        );
    }

    #[tokio::test]
    async fn classic_exact_match_short_circuits() {
        let (classic_client, application_client) = fixtures();

        let records = resolve(
            Some("legacy-api"),
            &classic_client,
            &application_client,
            &limiter(),
            100,
        )
        .await
        .unwrap();

        assert_eq!(names(&records), vec!["legacy-api"]);
        assert_eq!(classic_client.calls(), vec!["elb:exact:legacy-api"]);
        assert!(application_client.calls().is_empty());
    }

    #[tokio::test]
    async fn v2_exact_match_skips_the_substring_fallback() {
        let (classic_client, application_client) = fixtures();

        let records = resolve(
            Some("api-gateway"),
            &classic_client,
            &application_client,
            &limiter(),
            100,
        )
        .await
        .unwrap();

        assert_eq!(names(&records), vec!["api-gateway"]);
        assert_eq!(classic_client.calls(), vec!["elb:exact:api-gateway"]);
        assert_eq!(application_client.calls(), vec!["elbv2:exact:api-gateway"]);
    }

    #[tokio::test]
    async fn falls_back_to_substring_matches_across_generations() {
        let (classic_client, application_client) = fixtures();

        let records = resolve(
            Some("web"),
            &classic_client,
            &application_client,
            &limiter(),
            100,
        )
        .await
        .unwrap();

        assert_eq!(names(&records), vec!["legacy-web", "web-frontend"]);
    }

    #[tokio::test]
    async fn substring_match_is_case_sensitive() {
        let (classic_client, application_client) = fixtures();

        let records = resolve(
            Some("WEB"),
            &classic_client,
            &application_client,
            &limiter(),
            100,
        )
        .await
        .unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn other_errors_from_exact_lookup_propagate() {
        let (mut classic_client, application_client) = fixtures();
        classic_client.fail_exact = true;

        let result = resolve(
            Some("web"),
            &classic_client,
            &application_client,
            &limiter(),
            100,
        )
        .await;

        assert!(matches!(result, Err(ProviderError::Api { .. })));
        assert!(application_client.calls().is_empty());
    }

    #[tokio::test]
    async fn v2_lookup_errors_are_not_treated_as_not_found() {
        let (classic_client, mut application_client) = fixtures();
        application_client.fail_exact = true;

        let result = resolve(
            Some("web"),
            &classic_client,
            &application_client,
            &limiter(),
            100,
        )
        .await;

        assert!(result.is_err());
        // No fallback listing was attempted.
        assert_eq!(classic_client.calls(), vec!["elb:exact:web"]);
    }
}
