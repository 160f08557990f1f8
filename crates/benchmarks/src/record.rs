// Copyright 2025 Benchplot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark record types.
//!
//! Rows go through three shapes on their way to a chart:
//!
//! ```text
//! RawRow (as read) -> BenchmarkRecord (clean) -> DerivedRow (plotted)
//! ```
//!
//! Aggregate rows (mean/median/stddev lines emitted next to the per-run
//! results) are recognised once, when a [`RawRow`] is parsed, and never make
//! it past the cleaning step.

use crate::error::{PlotError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// One row of the input `benchmarks` array, classified at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRow {
    /// Synthetic summary row, identified by a string `aggregate_name`.
    Aggregate {
        /// Name of the row, when it has a string one.
        name: Option<String>,
        /// Kind of aggregate, e.g. `mean` or `stddev`.
        aggregate_name: String,
    },
    /// A single run of one benchmark configuration.
    Run(BenchmarkRecord),
}

impl RawRow {
    /// Classify one JSON row.
    ///
    /// A row is an aggregate iff its `aggregate_name` holds a string. Absent,
    /// `null` or non-string values mean a regular run, which must carry every
    /// field of [`BenchmarkRecord`].
    pub fn from_value(index: usize, value: Value) -> Result<Self> {
        if let Some(Value::String(aggregate_name)) = value.get("aggregate_name") {
            return Ok(RawRow::Aggregate {
                name: value.get("name").and_then(Value::as_str).map(str::to_owned),
                aggregate_name: aggregate_name.clone(),
            });
        }

        serde_json::from_value(value)
            .map(RawRow::Run)
            .map_err(|source| PlotError::InvalidRecord { index, source })
    }

    /// Whether this row is a synthetic aggregate.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, RawRow::Aggregate { .. })
    }
}

/// A clean, per-run benchmark record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkRecord {
    /// Composite identifier, e.g. `BM_encode/1000/repeats:5`.
    pub name: String,
    /// Total runs for this configuration.
    #[serde(deserialize_with = "integer_like")]
    pub repetitions: i64,
    /// Which run this row represents.
    #[serde(deserialize_with = "integer_like")]
    pub repetition_index: i64,
    /// Reported throughput in bytes per second.
    pub bytes_per_second: f64,
    /// Payload size parameter.
    #[serde(deserialize_with = "integer_like")]
    pub size: i64,
}

/// A clean record reshaped for plotting.
///
/// Field order is the column order of the chart data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRow {
    /// Benchmark identifier derived from `name`.
    pub benchmark: String,
    /// Composite identifier, unchanged.
    pub name: String,
    /// Total runs for this configuration.
    pub runs: i64,
    /// Which run this row represents.
    pub run_index: i64,
    /// Throughput in MB/s (binary megabytes).
    pub throughput: f64,
    /// Payload size parameter.
    pub size: i64,
}

/// Accepts JSON integers as well as floats, which benchmark counters are
/// written as. Floats truncate toward zero.
fn integer_like<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    match number.as_f64() {
        Some(value) if value.is_finite() && value.abs() < i64::MAX as f64 => {
            Ok(value.trunc() as i64)
        }
        _ => Err(serde::de::Error::custom(format!(
            "expected an integer, got {number}"
        ))),
    }
}
