// 3rd party crates
use thiserror::Error;

// Project imports
use crate::providers::errors::ProviderError;

// Current module imports
use super::types::EnrichmentFailure;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Failed to list load balancers: {0}")]
    Listing(#[from] ProviderError),

    #[error(
        "Health lookup failed for {} of {total} load balancers: {}",
        .failures.len(),
        join_failures(.failures)
    )]
    Enrichment {
        failures: Vec<EnrichmentFailure>,
        total: usize,
    },
}

impl InventoryError {
    /// Folds two enrichment outcomes into one, keeping every failure.
    pub fn merge(self, other: InventoryError) -> InventoryError {
        match (self, other) {
            (
                InventoryError::Enrichment {
                    mut failures,
                    total,
                },
                InventoryError::Enrichment {
                    failures: more,
                    total: more_total,
                },
            ) => {
                failures.extend(more);
                InventoryError::Enrichment {
                    failures,
                    total: total + more_total,
                }
            }
            (listing @ InventoryError::Listing(_), _) => listing,
            (_, listing) => listing,
        }
    }
}

fn join_failures(failures: &[EnrichmentFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
