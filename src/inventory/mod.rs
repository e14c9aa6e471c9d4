//! Load balancer inventory: discovery, health enrichment and name resolution.
//!
//! The pipeline is
//! 1. [`resolver::resolve`] decides between an exact-name lookup and a full
//!    (optionally substring-filtered) listing, paging through both API
//!    generations with [`paginator::fetch_all`].
//! 2. [`enricher`] issues the health lookups for every record concurrently
//!    and writes each record's summary from [`aggregator::aggregate`].
//! 3. [`functions::list_load_balancers`] joins both generations before
//!    handing the merged records back.
//!
//! Every provider call goes through a shared
//! [`CallLimiter`](crate::utility::limiter::CallLimiter), and all concurrency
//! lives inside the caller's task, so dropping the returned future cancels
//! every call still in flight.

pub mod aggregator;
pub mod enricher;
pub mod errors;
pub mod functions;
pub mod paginator;
pub mod resolver;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod fakes;

pub use functions::list_load_balancers;
