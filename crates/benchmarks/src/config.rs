// Copyright 2025 Benchplot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Renderer configuration.

use crate::io::THROUGHPUT_FILE;
use std::fmt;
use std::path::PathBuf;

/// Prefix stripped from benchmark identifiers by default.
pub const DEFAULT_BENCHMARK_PREFIX: &str = "BM_";

/// Default width, in columns, of wrapped chart subtitles.
pub const DEFAULT_SUBTITLE_WIDTH: usize = 70;

/// Versions of the charting runtime pinned in the page's script includes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VegaVersions {
    /// Vega runtime.
    pub vega: String,
    /// Vega-Lite compiler; also selects the chart `$schema`.
    pub vega_lite: String,
    /// Vega-Embed helper.
    pub vega_embed: String,
}

impl Default for VegaVersions {
    fn default() -> Self {
        Self {
            vega: "5".to_string(),
            vega_lite: "5.20.1".to_string(),
            vega_embed: "6".to_string(),
        }
    }
}

/// Row fields that may be added to the grouping key after `benchmark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupField {
    /// The full composite benchmark name.
    Name,
    /// Total runs of the configuration.
    Runs,
    /// Payload size parameter.
    Size,
}

impl GroupField {
    /// Column name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupField::Name => "name",
            GroupField::Runs => "runs",
            GroupField::Size => "size",
        }
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for turning a clean dataset into a throughput page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    /// Where the page is written.
    pub output: PathBuf,
    /// Prefix removed from the first `/` segment of each name.
    pub benchmark_prefix: String,
    /// Runtime versions for the script includes.
    pub versions: VegaVersions,
    /// Grouping fields following `benchmark`. Empty means one chart per
    /// benchmark.
    pub extra_group_fields: Vec<GroupField>,
    /// Subtitle wrap width in columns.
    pub subtitle_width: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(THROUGHPUT_FILE),
            benchmark_prefix: DEFAULT_BENCHMARK_PREFIX.to_string(),
            versions: VegaVersions::default(),
            extra_group_fields: Vec::new(),
            subtitle_width: DEFAULT_SUBTITLE_WIDTH,
        }
    }
}

impl PlotConfig {
    /// Default settings writing to `output`.
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    /// Add grouping fields after `benchmark`.
    pub fn group_by(mut self, fields: impl IntoIterator<Item = GroupField>) -> Self {
        self.extra_group_fields.extend(fields);
        self
    }
}
