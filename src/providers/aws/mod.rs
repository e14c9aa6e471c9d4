//! AWS SDK adapters for both load balancer API generations.
//!
//! These are the only place the SDK types appear; everything above works on
//! the records and error kinds from [`crate::providers::types`].

pub mod constants;
pub mod functions;
pub mod impls;
pub mod types;

pub use functions::load_sdk_config;
pub use types::{ApplicationClient, ClassicClient};
