// Copyright 2025 Benchplot Contributors
// SPDX-License-Identifier: Apache-2.0

//! I/O operations for benchmark results.
//!
//! Reading the benchmark JSON and writing the rendered page are the only
//! file-system touches of the pipeline. Output directories are never created;
//! a missing directory is an error.

use crate::error::{PlotError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Default throughput page path.
pub const THROUGHPUT_FILE: &str = "benchmark_results/throughput.html";

/// Read and parse a JSON document from disk.
pub fn read_json(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| PlotError::io(path, e))?;
    serde_json::from_str(&content).map_err(PlotError::Json)
}

/// Write a fully rendered page, replacing any existing file.
pub fn write_page(contents: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|e| PlotError::io(path, e))
}
