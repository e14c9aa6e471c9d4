// Standard library
use std::future::Future;

// 3rd party crates
use tracing::debug;

// Project imports
use crate::providers::errors::ProviderError;
use crate::providers::types::Page;

// Current module imports
use super::traits::Paginated;

/// Drains a marker-paginated API into one flat list.
///
/// Calls `describe` with `initial`, then again with each returned
/// continuation marker until a page comes back without one. Items keep page
/// order. The first failed call aborts the walk and nothing collected so far
/// is returned.
pub async fn fetch_all<P, T, F, Fut>(mut describe: F, initial: P) -> Result<Vec<T>, ProviderError>
where
    P: Paginated,
    F: FnMut(P) -> Fut,
    Fut: Future<Output = Result<Page<T>, ProviderError>>,
{
    let mut params: P = initial;
    let mut items: Vec<T> = Vec::new();
    let mut pages: usize = 0;

    loop {
        let page: Page<T> = describe(params.clone()).await?;
        pages += 1;
        items.extend(page.items);

        // An empty marker would re-request the first page forever.
        match page.next_marker.filter(|marker| !marker.is_empty()) {
            Some(marker) => params.set_marker(marker),
            None => break,
        }
    }

    debug!(pages = pages, items = items.len(), "Pagination complete");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::types::DescribeParams;
    use std::sync::Mutex;

    fn page(items: &[u32], next_marker: Option<&str>) -> Page<u32> {
        Page {
            items: items.to_vec(),
            next_marker: next_marker.map(String::from),
        }
    }

    #[tokio::test]
    async fn follows_markers_until_the_last_page() {
        let seen: Mutex<Vec<Option<String>>> = Mutex::new(Vec::new());
        let seen_ref = &seen;

        let items = fetch_all(
            move |params: DescribeParams| async move {
                seen_ref.lock().unwrap().push(params.marker.clone());
                match params.marker.as_deref() {
                    None => Ok(page(&[1, 2], Some("m1"))),
                    Some("m1") => Ok(page(&[3, 4], Some("m2"))),
                    Some("m2") => Ok(page(&[5], None)),
                    Some(other) => panic!("unexpected marker {}", other),
                }
            },
            DescribeParams {
                page_size: 2,
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some("m1".to_string()), Some("m2".to_string())]
        );
    }

    #[tokio::test]
    async fn keeps_the_initial_parameters_on_every_page() {
        let items = fetch_all(
            |params: DescribeParams| async move {
                assert_eq!(params.page_size, 100);
                assert!(params.names.is_empty());
                match params.marker {
                    None => Ok(page(&[7], Some("next"))),
                    Some(_) => Ok(page(&[8], None)),
                }
            },
            DescribeParams {
                page_size: 100,
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(items, vec![7, 8]);
    }

    #[tokio::test]
    async fn empty_first_page_yields_no_records() {
        let items: Vec<u32> = fetch_all(|_: Option<String>| async { Ok(page(&[], None)) }, None)
            .await
            .unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn empty_marker_ends_pagination() {
        let items = fetch_all(|_: Option<String>| async { Ok(page(&[1], Some(""))) }, None)
            .await
            .unwrap();

        assert_eq!(items, vec![1]);
    }

    #[tokio::test]
    async fn a_failed_page_discards_earlier_pages() {
        let result = fetch_all(
            |marker: Option<String>| async move {
                match marker {
                    None => Ok(page(&[1, 2], Some("m1"))),
                    Some(_) => Err(ProviderError::Api {
                        operation: "elb:DescribeLoadBalancers".into(),
                        message: "AccessDenied".into(),
                    }),
                }
            },
            None,
        )
        .await;

        assert!(matches!(result, Err(ProviderError::Api { .. })));
    }
}
