// Copyright 2025 Benchplot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-configuration summary statistics.

use crate::record::DerivedRow;
use std::collections::BTreeMap;

/// Run count and mean throughput of one configuration (one `name`).
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationSummary {
    /// Composite benchmark name.
    pub name: String,
    /// Number of runs.
    pub runs: usize,
    /// Mean throughput in MB/s.
    pub mean_throughput: f64,
}

/// Summarize rows per `name`, in sorted name order.
pub fn summarize(rows: &[DerivedRow]) -> Vec<ConfigurationSummary> {
    let mut totals: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for row in rows {
        let entry = totals.entry(row.name.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += row.throughput;
    }

    totals
        .into_iter()
        .map(|(name, (runs, sum))| ConfigurationSummary {
            name: name.to_string(),
            runs,
            mean_throughput: sum / runs as f64,
        })
        .collect()
}
