// Copyright 2025 Benchplot Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTML page generation for throughput charts.
//!
//! Every chart is mounted into its own numbered container so each one can be
//! downloaded individually from the page.

use crate::config::VegaVersions;
use std::fmt::Write;

const CDN_BASE: &str = "https://cdn.jsdelivr.net/npm";

/// Render the page for already serialized chart specifications, in order.
pub fn render_page(versions: &VegaVersions, charts: &[String]) -> String {
    let mut output = String::new();

    writeln!(output, "<!DOCTYPE html>").unwrap();
    writeln!(output, "<html>").unwrap();
    writeln!(output, "<head>").unwrap();
    for (package, version) in [
        ("vega", &versions.vega),
        ("vega-lite", &versions.vega_lite),
        ("vega-embed", &versions.vega_embed),
    ] {
        writeln!(
            output,
            "  <script src=\"{}/{}@{}\"></script>",
            CDN_BASE,
            package,
            escape_html(version)
        )
        .unwrap();
    }
    writeln!(output, "</head>").unwrap();
    writeln!(output, "<body>").unwrap();

    for index in 1..=charts.len() {
        writeln!(output, "<div id=\"vis{}\"></div>", index).unwrap();
    }

    writeln!(output, "<script type=\"text/javascript\">").unwrap();
    for (index, chart) in charts.iter().enumerate() {
        writeln!(
            output,
            "vegaEmbed('#vis{}', {}).catch(console.error);",
            index + 1,
            script_safe_json(chart)
        )
        .unwrap();
    }
    writeln!(output, "</script>").unwrap();
    writeln!(output, "</body>").unwrap();
    write!(output, "</html>").unwrap();

    output
}

/// Make serialized JSON safe to place inside a `<script>` element.
///
/// `<`, `>` and `&` only occur inside JSON strings, where their unicode
/// escapes decode to the same text. U+2028 and U+2029 are line terminators
/// in older JavaScript engines.
pub fn script_safe_json(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
