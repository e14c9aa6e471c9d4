// Project imports
use crate::providers::types::LoadBalancerRecord;

// Current module imports
use super::types::{Column, DisplayOptions};

/// Gap between columns.
pub const COLUMN_SEPARATOR: &str = "  ";

/// Table columns in display order; optional columns trail the fixed ones.
pub static COLUMNS: [Column; 6] = [
    Column {
        name: "name",
        enabled: always,
        render: name,
    },
    Column {
        name: "scheme",
        enabled: always,
        render: scheme,
    },
    Column {
        name: "type",
        enabled: always,
        render: lb_type,
    },
    Column {
        name: "states",
        enabled: always,
        render: states,
    },
    Column {
        name: "dns",
        enabled: dns_enabled,
        render: dns_name,
    },
    Column {
        name: "arn",
        enabled: arn_enabled,
        render: arn,
    },
];

fn always(_: &DisplayOptions) -> bool {
    true
}

fn dns_enabled(options: &DisplayOptions) -> bool {
    options.dns
}

fn arn_enabled(options: &DisplayOptions) -> bool {
    options.arn
}

fn name(record: &LoadBalancerRecord) -> String {
    record.name.clone()
}

fn scheme(record: &LoadBalancerRecord) -> String {
    record.scheme.clone()
}

fn lb_type(record: &LoadBalancerRecord) -> String {
    record.lb_type.clone().unwrap_or_else(|| "classic".to_string())
}

fn dns_name(record: &LoadBalancerRecord) -> String {
    record.dns_name.clone().unwrap_or_default()
}

fn arn(record: &LoadBalancerRecord) -> String {
    record.arn.clone().unwrap_or_else(|| "-".to_string())
}

fn states(record: &LoadBalancerRecord) -> String {
    record.states_summary.clone().unwrap_or_default()
}
