// 3rd party crates
use tracing::debug;

// Current module imports
use super::traits::HealthReport;
use super::types::HealthSummary;

/// State recorded for a target whose report carried no state.
pub const UNKNOWN_STATE: &str = "unknown";

/// Counts the health states in `targets`, in the order they first appear.
///
/// Accepts either generation's record shape (or a mix of both through
/// an enum of the two). Never fails; no targets
/// gives an empty summary.
pub fn aggregate<I>(targets: I) -> HealthSummary
where
    I: IntoIterator,
    I::Item: HealthReport,
{
    let mut summary: HealthSummary = HealthSummary::default();
    for target in targets {
        let state: &str = target.state().unwrap_or_else(|| {
            debug!(id = ?target.id(), "No health state reported");
            UNKNOWN_STATE
        });
        summary.record(state);
    }
    summary
}
