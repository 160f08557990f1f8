// Copyright 2025 Benchplot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Throughput charts from benchmark JSON results.
//!
//! This crate turns the JSON report of a benchmark run into a static HTML
//! page with one interactive Vega-Lite chart per benchmark.
//!
//! # Quick Start
//!
//! ```no_run
//! use benchplot_benchmarks::{load_file, plot_throughput, PlotConfig};
//!
//! let dataset = load_file("results.json")?;
//! let page = plot_throughput(&dataset, &PlotConfig::default())?;
//! println!("{} charts", page.groups.len());
//! # Ok::<(), benchplot_benchmarks::PlotError>(())
//! ```
//!
//! # Modules
//!
//! - [`record`] - Row types for each pipeline stage
//! - [`loader`] - Aggregate-row removal
//! - [`transform`] - Row derivation and grouping
//! - [`stats`] - Per-configuration means
//! - [`chart`] - Vega-Lite chart specifications
//! - [`html`] - Page rendering
//! - [`io`] - Reading input and writing the page

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod chart;
pub mod config;
pub mod error;
pub mod html;
pub mod io;
pub mod loader;
pub mod record;
pub mod stats;
pub mod transform;

pub use config::{GroupField, PlotConfig, VegaVersions};
pub use error::{PlotError, Result};
pub use loader::CleanDataset;
pub use record::{BenchmarkRecord, DerivedRow, RawRow};
pub use transform::ChartGroup;

use chart::ChartSpec;
use std::path::Path;
use tracing::info;

/// A rendered throughput page and the groups it charts, in page order.
#[derive(Debug, Clone)]
pub struct ThroughputPage {
    /// One entry per chart.
    pub groups: Vec<ChartGroup>,
    /// The complete HTML document.
    pub html: String,
}

/// Read a benchmark JSON file and clean it.
pub fn load_file(path: impl AsRef<Path>) -> Result<CleanDataset> {
    let document = io::read_json(path)?;
    loader::load(document)
}

/// Build every chart of a dataset and render the page in memory.
///
/// # Errors
///
/// Returns [`PlotError::EmptyName`] if a record has an empty name, or
/// [`PlotError::Serialize`] if a chart cannot be serialized.
pub fn render_throughput(dataset: &CleanDataset, config: &PlotConfig) -> Result<ThroughputPage> {
    let rows = transform::derive_rows(dataset, &config.benchmark_prefix)?;
    let groups = transform::group_rows(rows, &config.extra_group_fields);

    let charts = groups
        .iter()
        .map(|group| ChartSpec::throughput(group, config).to_json())
        .collect::<Result<Vec<_>>>()?;

    let html = html::render_page(&config.versions, &charts);
    info!(charts = charts.len(), "Rendered throughput page");

    Ok(ThroughputPage { groups, html })
}

/// Render the page and write it to `config.output`.
///
/// The page is fully rendered before the single write, so a failure never
/// leaves a partial file. The output directory must already exist.
pub fn plot_throughput(dataset: &CleanDataset, config: &PlotConfig) -> Result<ThroughputPage> {
    let page = render_throughput(dataset, config)?;
    io::write_page(&page.html, &config.output)?;
    info!(path = %config.output.display(), "Wrote throughput page");
    Ok(page)
}
