// Project imports
use crate::providers::types::LoadBalancerRecord;

// Current module imports
use super::constants::{COLUMNS, COLUMN_SEPARATOR};
use super::types::{Column, DisplayOptions};

/// Orders records by name; a classic and a v2 load balancer sharing a name
/// list classic first.
pub fn sort_records(records: &mut [LoadBalancerRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name).then(a.kind.cmp(&b.kind)));
}

/// Renders one line per record, every column but the last padded to its
/// widest cell.
pub fn render_table(records: &[LoadBalancerRecord], options: &DisplayOptions) -> Vec<String> {
    let columns: Vec<&Column> = COLUMNS
        .iter()
        .filter(|column| (column.enabled)(options))
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len() + 1);
    if options.header {
        rows.push(
            columns
                .iter()
                .map(|column| column.name.to_uppercase())
                .collect(),
        );
    }
    rows.extend(
        records
            .iter()
            .map(|record| columns.iter().map(|column| (column.render)(record)).collect()),
    );

    let widths: Vec<usize> = (0..columns.len())
        .map(|idx| {
            rows.iter()
                .map(|row| row[idx].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            let last: usize = row.len().saturating_sub(1);
            row.iter()
                .enumerate()
                .map(|(idx, cell)| {
                    if idx == last {
                        cell.clone()
                    } else {
                        format!("{:width$}", cell, width = widths[idx])
                    }
                })
                .collect::<Vec<String>>()
                .join(COLUMN_SEPARATOR)
                .trim_end()
                .to_string()
        })
        .collect()
}

pub fn render_json(records: &[LoadBalancerRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
