// Copyright 2025 Benchplot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading benchmark results and rendering charts.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur anywhere in the plotting pipeline.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Reading the input or writing the output file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The input is not valid JSON
    #[error("Invalid JSON input: {0}")]
    Json(#[source] serde_json::Error),

    /// The top-level `benchmarks` key is absent
    #[error("Input has no top-level \"benchmarks\" key")]
    MissingBenchmarks,

    /// The top-level `benchmarks` value is not an array
    #[error("Top-level \"benchmarks\" is not an array")]
    BenchmarksNotArray,

    /// A row is missing a required field or holds an incompatible type
    #[error("Invalid benchmark record at index {index}: {source}")]
    InvalidRecord {
        /// Position of the row in the input array
        index: usize,
        /// Deserialization failure
        #[source]
        source: serde_json::Error,
    },

    /// A row's name has nothing to derive a benchmark identifier from
    #[error("Benchmark record at index {index} has an empty name")]
    EmptyName {
        /// Position of the record in the clean dataset
        index: usize,
    },

    /// A chart specification could not be serialized
    #[error("Failed to serialize chart: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl PlotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PlotError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for plotting operations.
pub type Result<T> = std::result::Result<T, PlotError>;
