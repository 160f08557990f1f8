// Copyright 2025 Benchplot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Vega-Lite chart specifications.
//!
//! Each chart group becomes one layered Vega-Lite document: a scatter of the
//! individual runs plus a horizontal rule at the mean throughput of every
//! configuration. The group's rows are embedded inline as the chart data.

use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use crate::record::DerivedRow;
use crate::transform::ChartGroup;
use serde::Serialize;

/// X axis title.
pub const RUNS_AXIS_TITLE: &str = "Runs [-]";

/// Y axis title.
pub const THROUGHPUT_AXIS_TITLE: &str = "Throughput [MB/s]";

/// Color legend title.
pub const CONFIGURATION_LEGEND_TITLE: &str = "Configuration";

const DEFAULT_VIEW_SIZE: u32 = 300;

/// A complete Vega-Lite document for one chart group.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec<'a> {
    /// Vega-Lite schema URL.
    #[serde(rename = "$schema")]
    pub schema: String,
    /// Top-level chart configuration.
    pub config: ChartConfig,
    /// Rows plotted by every layer.
    pub data: InlineData<'a>,
    /// Chart title and subtitle lines.
    pub title: Title,
    /// Scatter layer followed by the mean rule layer.
    pub layer: Vec<Layer>,
}

/// Top-level `config` block.
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    /// Default view size.
    pub view: ViewConfig,
}

/// Size of a continuous view, in pixels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    /// Width.
    pub continuous_width: u32,
    /// Height.
    pub continuous_height: u32,
}

/// Data embedded in the document.
#[derive(Debug, Clone, Serialize)]
pub struct InlineData<'a> {
    /// One object per row.
    pub values: &'a [DerivedRow],
}

/// Chart heading.
#[derive(Debug, Clone, Serialize)]
pub struct Title {
    /// Main title.
    pub text: String,
    /// Subtitle lines, possibly none.
    pub subtitle: Vec<String>,
}

/// One layer of a layered chart.
#[derive(Debug, Clone, Serialize)]
pub struct Layer {
    /// Mark drawn by the layer.
    pub mark: Mark,
    /// Field bindings.
    pub encoding: Encoding,
}

/// Mark definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mark {
    /// Mark type.
    #[serde(rename = "type")]
    pub kind: MarkKind,
}

/// Mark types used by throughput charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    /// Scatter point.
    Point,
    /// Horizontal or vertical rule.
    Rule,
}

/// Channel bindings of a layer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Encoding {
    /// Horizontal position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Channel>,
    /// Vertical position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Channel>,
    /// Mark color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Channel>,
}

/// One encoding channel bound to a data field.
#[derive(Debug, Clone, Serialize)]
pub struct Channel {
    /// Column of [`DerivedRow`] the channel reads.
    pub field: &'static str,
    /// Measurement type of the field.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Aggregation applied before plotting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    /// Axis settings for positional channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Guide>,
    /// Legend settings for color channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Guide>,
}

impl Channel {
    fn new(field: &'static str, kind: FieldKind) -> Self {
        Self {
            field,
            kind,
            aggregate: None,
            axis: None,
            legend: None,
        }
    }

    fn axis(mut self, title: &'static str) -> Self {
        self.axis = Some(Guide { title });
        self
    }

    fn legend(mut self, title: &'static str) -> Self {
        self.legend = Some(Guide { title });
        self
    }

    fn aggregate(mut self, aggregate: Aggregate) -> Self {
        self.aggregate = Some(aggregate);
        self
    }
}

/// Vega-Lite measurement types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Continuous numbers.
    Quantitative,
    /// Unordered categories.
    Nominal,
}

/// Aggregations used by throughput charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    /// Arithmetic mean.
    Mean,
}

/// Axis or legend settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guide {
    /// Guide title.
    pub title: &'static str,
}

impl<'a> ChartSpec<'a> {
    /// Build the throughput chart of one group.
    pub fn throughput(group: &'a ChartGroup, config: &PlotConfig) -> Self {
        let runs = Layer {
            mark: Mark {
                kind: MarkKind::Point,
            },
            encoding: Encoding {
                x: Some(Channel::new("run_index", FieldKind::Quantitative).axis(RUNS_AXIS_TITLE)),
                y: Some(
                    Channel::new("throughput", FieldKind::Quantitative)
                        .axis(THROUGHPUT_AXIS_TITLE),
                ),
                color: Some(
                    Channel::new("name", FieldKind::Nominal).legend(CONFIGURATION_LEGEND_TITLE),
                ),
            },
        };

        let means = Layer {
            mark: Mark {
                kind: MarkKind::Rule,
            },
            encoding: Encoding {
                x: None,
                y: Some(
                    Channel::new("throughput", FieldKind::Quantitative)
                        .aggregate(Aggregate::Mean),
                ),
                color: Some(Channel::new("name", FieldKind::Nominal)),
            },
        };

        Self {
            schema: schema_url(&config.versions.vega_lite),
            config: ChartConfig {
                view: ViewConfig {
                    continuous_width: DEFAULT_VIEW_SIZE,
                    continuous_height: DEFAULT_VIEW_SIZE,
                },
            },
            data: InlineData { values: &group.rows },
            title: Title {
                text: group.title(),
                subtitle: group.subtitle(config.subtitle_width),
            },
            layer: vec![runs, means],
        }
    }

    /// Compact JSON, no indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(PlotError::Serialize)
    }
}

/// `$schema` URL for a Vega-Lite version.
pub fn schema_url(vega_lite_version: &str) -> String {
    format!("https://vega.github.io/schema/vega-lite/v{}.json", vega_lite_version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::group_rows;
    use serde_json::{json, Value};

    fn foo_group() -> ChartGroup {
        let rows = [0, 1]
            .into_iter()
            .map(|run_index| DerivedRow {
                benchmark: "Foo".to_string(),
                name: "BM_Foo/1".to_string(),
                runs: 2,
                run_index,
                throughput: (run_index + 1) as f64,
                size: 10,
            })
            .collect();
        group_rows(rows, &[]).remove(0)
    }

    #[test]
    fn test_spec_layers_and_encodings() {
        let group = foo_group();
        let spec = ChartSpec::throughput(&group, &PlotConfig::default());
        let value: Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();

        assert_eq!(
            value["$schema"],
            "https://vega.github.io/schema/vega-lite/v5.20.1.json"
        );
        assert_eq!(value["title"], json!({"text": "Foo", "subtitle": []}));
        assert_eq!(
            value["layer"][0],
            json!({
                "mark": {"type": "point"},
                "encoding": {
                    "x": {"field": "run_index", "type": "quantitative", "axis": {"title": "Runs [-]"}},
                    "y": {"field": "throughput", "type": "quantitative", "axis": {"title": "Throughput [MB/s]"}},
                    "color": {"field": "name", "type": "nominal", "legend": {"title": "Configuration"}}
                }
            })
        );
        assert_eq!(
            value["layer"][1],
            json!({
                "mark": {"type": "rule"},
                "encoding": {
                    "y": {"field": "throughput", "type": "quantitative", "aggregate": "mean"},
                    "color": {"field": "name", "type": "nominal"}
                }
            })
        );
    }

    #[test]
    fn test_spec_embeds_group_rows() {
        let group = foo_group();
        let spec = ChartSpec::throughput(&group, &PlotConfig::default());
        let value: Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();

        let values = value["data"]["values"].as_array().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[1]["throughput"], 2.0);
        assert_eq!(values[1]["benchmark"], "Foo");
    }

    #[test]
    fn test_to_json_is_compact() {
        let group = foo_group();
        let json = ChartSpec::throughput(&group, &PlotConfig::default())
            .to_json()
            .unwrap();
        assert!(!json.contains('\n'));
        assert!(!json.contains(": "));
    }
}
