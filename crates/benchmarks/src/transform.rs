// Copyright 2025 Benchplot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Deriving plot rows and grouping them into charts.

use crate::config::GroupField;
use crate::error::{PlotError, Result};
use crate::loader::CleanDataset;
use crate::record::{BenchmarkRecord, DerivedRow};
use crate::stats::{summarize, ConfigurationSummary};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Bytes in one (binary) megabyte.
pub const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Convert bytes per second to MB/s.
pub fn bps_to_mbps(bps: f64) -> f64 {
    bps / BYTES_PER_MEGABYTE
}

/// Benchmark identifier of a composite name: the first `/` segment without
/// `prefix`.
pub fn benchmark_name<'a>(name: &'a str, prefix: &str) -> &'a str {
    let head = name.split('/').next().unwrap_or(name);
    head.strip_prefix(prefix).unwrap_or(head)
}

/// Reshape one clean record for plotting.
pub fn derive_row(index: usize, record: &BenchmarkRecord, prefix: &str) -> Result<DerivedRow> {
    if record.name.is_empty() {
        return Err(PlotError::EmptyName { index });
    }

    Ok(DerivedRow {
        benchmark: benchmark_name(&record.name, prefix).to_string(),
        name: record.name.clone(),
        runs: record.repetitions,
        run_index: record.repetition_index,
        throughput: bps_to_mbps(record.bytes_per_second),
        size: record.size,
    })
}

/// Reshape every record of a dataset, in order.
pub fn derive_rows(dataset: &CleanDataset, prefix: &str) -> Result<Vec<DerivedRow>> {
    dataset
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| derive_row(index, record, prefix))
        .collect()
}

/// Value of one grouping field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyValue {
    /// String field.
    Text(String),
    /// Integer field, ordered numerically.
    Integer(i64),
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Text(text) => f.write_str(text),
            KeyValue::Integer(value) => write!(f, "{}", value),
        }
    }
}

/// Key shared by all rows of one chart.
///
/// Keys order by benchmark first, then by each extra field in turn.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKey {
    /// Derived benchmark identifier.
    pub benchmark: String,
    /// Extra grouping fields in configured order.
    pub fields: Vec<(GroupField, KeyValue)>,
}

impl GroupKey {
    fn of(row: &DerivedRow, extra: &[GroupField]) -> Self {
        let fields = extra
            .iter()
            .map(|field| {
                let value = match field {
                    GroupField::Name => KeyValue::Text(row.name.clone()),
                    GroupField::Runs => KeyValue::Integer(row.runs),
                    GroupField::Size => KeyValue::Integer(row.size),
                };
                (*field, value)
            })
            .collect();
        Self {
            benchmark: row.benchmark.clone(),
            fields,
        }
    }
}

/// All rows sharing one [`GroupKey`]; rendered as one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGroup {
    /// Shared key.
    pub key: GroupKey,
    /// Rows in dataset order.
    pub rows: Vec<DerivedRow>,
}

impl ChartGroup {
    /// Chart title: the benchmark with underscores as spaces, capitalized.
    pub fn title(&self) -> String {
        capitalize(&self.key.benchmark.replace('_', " "))
    }

    /// Extra key fields as `field = value` pairs, wrapped to `width`.
    pub fn subtitle(&self, width: usize) -> Vec<String> {
        let pairs = self
            .key
            .fields
            .iter()
            .map(|(field, value)| format!("{} = {}", field, value))
            .collect::<Vec<_>>()
            .join(", ");
        wrap(&pairs, width)
    }

    /// Run count and mean throughput per configuration.
    pub fn summaries(&self) -> Vec<ConfigurationSummary> {
        summarize(&self.rows)
    }
}

/// Group rows by `benchmark` plus `extra` fields, in sorted key order.
pub fn group_rows(rows: Vec<DerivedRow>, extra: &[GroupField]) -> Vec<ChartGroup> {
    let mut groups: BTreeMap<GroupKey, Vec<DerivedRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(GroupKey::of(&row, extra)).or_default().push(row);
    }

    groups
        .into_iter()
        .map(|(key, rows)| {
            debug!(benchmark = %key.benchmark, rows = rows.len(), "Built chart group");
            ChartGroup { key, rows }
        })
        .collect()
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Greedy word wrap. Words longer than `width` are split across lines.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        while !word.is_empty() {
            let word_len = word.chars().count();
            let needed = if line.is_empty() { word_len } else { line_len + 1 + word_len };

            if needed <= width {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                line_len = needed;
                break;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
                continue;
            }

            let split = word
                .char_indices()
                .nth(width)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;
    use serde_json::json;

    fn row(benchmark: &str, name: &str, size: i64, throughput: f64) -> DerivedRow {
        DerivedRow {
            benchmark: benchmark.to_string(),
            name: name.to_string(),
            runs: 2,
            run_index: 0,
            throughput,
            size,
        }
    }

    #[test]
    fn test_bps_to_mbps_is_binary() {
        assert_eq!(bps_to_mbps(1048576.0), 1.0);
        assert_eq!(bps_to_mbps(2097152.0), 2.0);
        assert_eq!(bps_to_mbps(1_000_000.0), 1_000_000.0 / 1_048_576.0);
    }

    #[test]
    fn test_benchmark_name_ignores_suffix_segments() {
        assert_eq!(benchmark_name("BM_Foo", "BM_"), "Foo");
        assert_eq!(benchmark_name("BM_Foo/1", "BM_"), "Foo");
        assert_eq!(benchmark_name("BM_Foo/1/repeats:5/real_time", "BM_"), "Foo");
        assert_eq!(benchmark_name("encode/100", "BM_"), "encode");
    }

    #[test]
    fn test_benchmark_name_strips_only_leading_prefix() {
        assert_eq!(benchmark_name("Foo_BM_bar/1", "BM_"), "Foo_BM_bar");
    }

    #[test]
    fn test_derive_rows_renames_and_converts() {
        let dataset = load(json!({
            "benchmarks": [{
                "name": "BM_Foo/1",
                "repetitions": 2,
                "repetition_index": 1,
                "bytes_per_second": 2097152,
                "size": 10.0
            }]
        }))
        .unwrap();

        let rows = derive_rows(&dataset, "BM_").unwrap();
        assert_eq!(rows, vec![DerivedRow {
            benchmark: "Foo".to_string(),
            name: "BM_Foo/1".to_string(),
            runs: 2,
            run_index: 1,
            throughput: 2.0,
            size: 10,
        }]);
    }

    #[test]
    fn test_derive_rows_rejects_empty_name() {
        let dataset = load(json!({
            "benchmarks": [{
                "name": "",
                "repetitions": 1,
                "repetition_index": 0,
                "bytes_per_second": 1.0,
                "size": 1
            }]
        }))
        .unwrap();

        let err = derive_rows(&dataset, "BM_").unwrap_err();
        assert!(matches!(err, PlotError::EmptyName { index: 0 }));
    }

    #[test]
    fn test_group_rows_sorted_by_benchmark() {
        let rows = vec![
            row("encode", "encode/100", 100, 1.0),
            row("decode", "decode/100", 100, 2.0),
            row("encode", "encode/1000", 1000, 3.0),
        ];

        let groups = group_rows(rows, &[]);
        let keys: Vec<_> = groups.iter().map(|g| g.key.benchmark.as_str()).collect();
        assert_eq!(keys, ["decode", "encode"]);
        assert_eq!(groups[1].rows.len(), 2);
        assert_eq!(groups[1].rows[0].name, "encode/100");
        assert!(groups.iter().all(|g| g.key.fields.is_empty()));
    }

    #[test]
    fn test_group_rows_by_size_orders_numerically() {
        let rows = vec![
            row("encode", "encode/1000", 1000, 1.0),
            row("encode", "encode/100", 100, 2.0),
            row("encode", "encode/20", 20, 3.0),
        ];

        let groups = group_rows(rows, &[GroupField::Size]);
        let sizes: Vec<_> = groups.iter().map(|g| g.rows[0].size).collect();
        assert_eq!(sizes, [20, 100, 1000]);
        assert_eq!(groups[0].subtitle(70), vec!["size = 20".to_string()]);
    }

    #[test]
    fn test_title_replaces_underscores_and_capitalizes() {
        let group = group_rows(vec![row("encode_Large_buffer", "x", 1, 1.0)], &[]).remove(0);
        assert_eq!(group.title(), "Encode large buffer");
    }

    #[test]
    fn test_single_key_subtitle_is_empty() {
        let group = group_rows(vec![row("Foo", "BM_Foo/1", 1, 1.0)], &[]).remove(0);
        assert!(group.subtitle(70).is_empty());
    }

    #[test]
    fn test_capitalize_edge_cases() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize("ABC"), "Abc");
    }

    #[test]
    fn test_wrap_is_greedy() {
        assert_eq!(wrap("a = 1, b = 2", 6), vec!["a = 1,", "b = 2"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }
}
