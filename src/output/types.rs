// 3rd party crates
use clap::ValueEnum;

// Project imports
use crate::providers::types::LoadBalancerRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Optional columns switched on from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub header: bool,
    pub dns: bool,
    pub arn: bool,
}

/// One table column: shown when `enabled` says so, filled by `render`.
pub struct Column {
    pub name: &'static str,
    pub enabled: fn(&DisplayOptions) -> bool,
    pub render: fn(&LoadBalancerRecord) -> String,
}
