// Copyright 2025 Benchplot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Record loading and cleaning.

use crate::error::{PlotError, Result};
use crate::record::{BenchmarkRecord, RawRow};
use serde_json::Value;
use tracing::{debug, info};

/// Benchmark records with every aggregate row removed.
///
/// Records keep their input order and are addressed by contiguous positions
/// starting at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanDataset {
    records: Vec<BenchmarkRecord>,
    dropped: usize,
}

impl CleanDataset {
    /// Records in input order.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were retained.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of aggregate rows removed while cleaning.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Extract and classify the rows of the top-level `benchmarks` array.
pub fn extract_rows(document: Value) -> Result<Vec<RawRow>> {
    let rows = match document {
        Value::Object(mut map) => map
            .remove("benchmarks")
            .ok_or(PlotError::MissingBenchmarks)?,
        _ => return Err(PlotError::MissingBenchmarks),
    };

    match rows {
        Value::Array(rows) => rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| RawRow::from_value(index, row))
            .collect(),
        _ => Err(PlotError::BenchmarksNotArray),
    }
}

/// Drop aggregate rows, keeping the relative order of the rest.
pub fn clean(rows: Vec<RawRow>) -> CleanDataset {
    let total = rows.len();
    let mut records = Vec::with_capacity(total);

    for row in rows {
        match row {
            RawRow::Run(record) => records.push(record),
            RawRow::Aggregate {
                name,
                aggregate_name,
            } => {
                debug!(name = ?name, aggregate = %aggregate_name, "Dropping aggregate row");
            }
        }
    }

    let dropped = total - records.len();
    info!(rows = total, kept = records.len(), dropped, "Cleaned benchmark rows");

    CleanDataset { records, dropped }
}

/// Load a parsed benchmark document into a clean dataset.
pub fn load(document: Value) -> Result<CleanDataset> {
    extract_rows(document).map(clean)
}
