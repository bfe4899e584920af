//! Rendering of extraction reports for display.
//!
//! Everything that turns matched text into a display medium lives here;
//! HTML output escapes every string taken from the input.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde_json::json;
use sift_config::{OutputConfig, OutputFormat};
use sift_core::{CategoryResult, ExtractionReport, PatternDefinition};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub show_empty: bool,
    pub pretty_json: bool,
}

impl From<&OutputConfig> for RenderOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            format: config.format,
            show_empty: config.show_empty,
            pretty_json: config.pretty_json,
        }
    }
}

/// Render one or more labelled reports.
///
/// A single document renders as a bare report; several documents get a
/// heading each (text, HTML) or become an array of `{source, report}`
/// objects (JSON).
pub fn render_documents(
    documents: &[(&str, &ExtractionReport)],
    options: &RenderOptions,
) -> anyhow::Result<String> {
    if let [(_, report)] = documents {
        return render_report(report, options);
    }

    match options.format {
        OutputFormat::Json => {
            let value: Vec<serde_json::Value> = documents
                .iter()
                .map(|(source, report)| json!({ "source": source, "report": report }))
                .collect();
            to_json(&value, options.pretty_json)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (source, report) in documents {
                writeln!(out, "== {source} ==")?;
                write_text(&mut out, report, options.show_empty)?;
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Html => {
            let mut out = String::new();
            for (source, report) in documents {
                writeln!(out, "<h2>{}</h2>", encode_text(source))?;
                write_html(&mut out, report, options.show_empty)?;
            }
            Ok(out)
        }
    }
}

pub fn render_report(report: &ExtractionReport, options: &RenderOptions) -> anyhow::Result<String> {
    let mut out = String::new();
    match options.format {
        OutputFormat::Json => return to_json(report, options.pretty_json),
        OutputFormat::Text => write_text(&mut out, report, options.show_empty)?,
        OutputFormat::Html => write_html(&mut out, report, options.show_empty)?,
    }
    Ok(out)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');
    Ok(json)
}

fn visible<'a>(
    report: &'a ExtractionReport,
    show_empty: bool,
) -> impl Iterator<Item = &'a CategoryResult> {
    report.iter().filter(move |result| show_empty || result.has_matches())
}

fn write_text(out: &mut String, report: &ExtractionReport, show_empty: bool) -> std::fmt::Result {
    for result in visible(report, show_empty) {
        writeln!(
            out,
            "{} {} ({} found, {} unique)",
            result.pattern.icon, result.pattern.name, result.total_count, result.unique_count
        )?;
        if result.matches.is_empty() {
            writeln!(out, "   (none)")?;
        }
        for m in &result.matches {
            writeln!(out, "   - {m}")?;
        }
        out.push('\n');
    }

    if report.is_empty() {
        writeln!(out, "No structured data found in the text.")?;
    }

    let summary = &report.summary;
    writeln!(
        out,
        "Summary: {} matches in {} of {} categories ({} characters analyzed)",
        summary.total_matches,
        summary.patterns_with_matches,
        summary.total_patterns,
        summary.text_length
    )
}

fn write_html(out: &mut String, report: &ExtractionReport, show_empty: bool) -> std::fmt::Result {
    writeln!(out, "<section class=\"extraction-report\">")?;

    for result in visible(report, show_empty) {
        writeln!(
            out,
            "  <div class=\"category-card\" data-category=\"{}\">",
            encode_double_quoted_attribute(result.category().as_str())
        )?;
        writeln!(
            out,
            "    <h3><span class=\"icon\">{}</span> {} <span class=\"count\">{}</span></h3>",
            encode_text(result.pattern.icon),
            encode_text(result.pattern.name),
            result.total_count
        )?;
        if result.matches.is_empty() {
            writeln!(out, "    <p class=\"empty\">No matches</p>")?;
        } else {
            writeln!(out, "    <ul>")?;
            for m in &result.matches {
                writeln!(out, "      <li>{}</li>", encode_text(m))?;
            }
            writeln!(out, "    </ul>")?;
        }
        writeln!(out, "  </div>")?;
    }

    if report.is_empty() {
        writeln!(
            out,
            "  <p class=\"no-results\">No structured data found in the text.</p>"
        )?;
    }

    let summary = &report.summary;
    writeln!(
        out,
        "  <p class=\"summary\">{} matches in {} of {} categories, {} characters analyzed</p>",
        summary.total_matches,
        summary.patterns_with_matches,
        summary.total_patterns,
        summary.text_length
    )?;
    writeln!(out, "</section>")
}

/// Render the pattern table.
pub fn render_patterns<'a>(
    patterns: impl IntoIterator<Item = &'a PatternDefinition>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let patterns: Vec<&PatternDefinition> = patterns.into_iter().collect();
    let mut out = String::new();

    match format {
        OutputFormat::Json => return to_json(&patterns, true),
        OutputFormat::Text => {
            for def in patterns {
                writeln!(out, "{} {:<9} {}", def.icon, def.category.as_str(), def.name)?;
                writeln!(out, "    {}", def.pattern)?;
            }
        }
        OutputFormat::Html => {
            writeln!(out, "<table class=\"patterns\">")?;
            writeln!(out, "  <tr><th>Key</th><th>Name</th><th>Rule</th></tr>")?;
            for def in patterns {
                writeln!(
                    out,
                    "  <tr><td>{}</td><td>{} {}</td><td><code>{}</code></td></tr>",
                    encode_text(def.category.as_str()),
                    encode_text(def.icon),
                    encode_text(def.name),
                    encode_text(def.pattern)
                )?;
            }
            writeln!(out, "</table>")?;
        }
    }

    Ok(out)
}
