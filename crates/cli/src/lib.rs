// Copyright 2025 Benchplot Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for benchplot.
//!
//! Reads the JSON report of a benchmark run and writes
//! `benchmark_results/throughput.html`, one chart per benchmark.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use benchplot_benchmarks::{load_file, plot_throughput, PlotConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// benchplot CLI.
#[derive(Parser, Debug)]
#[command(name = "benchplot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The input .json file produced by the benchmark run.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
}

/// Install the stderr log subscriber, filtered by `RUST_LOG`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI with the process arguments.
///
/// Argument errors exit through clap before any file is touched.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute(&cli, &PlotConfig::default())
}

/// Load `cli.input` and write the throughput page described by `config`.
pub fn execute(cli: &Cli, config: &PlotConfig) -> anyhow::Result<()> {
    println!("Using benchplot {}", env!("CARGO_PKG_VERSION"));

    let dataset = load_file(&cli.input).with_context(|| {
        format!(
            "failed to load benchmark results from {}",
            cli.input.display()
        )
    })?;

    let page = plot_throughput(&dataset, config)
        .with_context(|| format!("failed to plot throughput to {}", config.output.display()))?;

    for group in &page.groups {
        for summary in group.summaries() {
            info!(
                benchmark = %group.key.benchmark,
                configuration = %summary.name,
                runs = summary.runs,
                mean_mb_per_s = summary.mean_throughput,
                "Mean throughput"
            );
        }
    }

    let file_name = config
        .output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.output.display().to_string());
    println!("Writing {}...", file_name);
    println!("Plotting operations");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_input_flag_is_an_error() {
        let err = Cli::try_parse_from(["benchplot"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_short_and_long_input_flags() {
        let cli = Cli::try_parse_from(["benchplot", "-i", "results.json"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("results.json"));

        let cli = Cli::try_parse_from(["benchplot", "--input", "other.json"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("other.json"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["benchplot", "-i", "a.json", "--output", "b"]).is_err());
    }

    #[test]
    fn test_execute_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("results.json");
        fs::write(
            &input,
            r#"{"benchmarks": [
                {"name": "BM_encode/100", "repetitions": 1, "repetition_index": 0,
                 "bytes_per_second": 1048576, "size": 100},
                {"name": "BM_encode/100_mean", "aggregate_name": "mean"}
            ]}"#,
        )
        .unwrap();
        let output = dir.path().join("throughput.html");

        let cli = Cli { input };
        execute(&cli, &PlotConfig::with_output(&output)).unwrap();

        let page = fs::read_to_string(&output).unwrap();
        assert_eq!(page.matches("<div id=\"vis").count(), 1);
    }

    #[test]
    fn test_execute_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("throughput.html");
        let cli = Cli {
            input: dir.path().join("absent.json"),
        };

        let err = execute(&cli, &PlotConfig::with_output(&output)).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to load benchmark results"));
        assert!(!output.exists());
    }
}
