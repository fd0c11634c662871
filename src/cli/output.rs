//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Path the fragment was written to, `None` when printed to stdout.
    pub output: Option<String>,
    /// Number of proxy names extracted.
    pub names: usize,
    /// Number of groups generated.
    pub groups: usize,
    /// Generated fragment, included only when printed to stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Formats the success report.
#[must_use]
pub fn format_report(report: &RunReport, verbose: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_report_text(report, verbose),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Success<'a> {
                success: bool,
                #[serde(flatten)]
                report: &'a RunReport,
            }
            let mut output = format_json(&Success {
                success: true,
                report,
            });
            output.push('\n');
            output
        }
    }
}

fn format_report_text(report: &RunReport, verbose: bool) -> String {
    let mut output = String::new();

    if let Some(ref text) = report.text {
        output.push_str(text);
        output.push('\n');
    }
    if let Some(ref path) = report.output {
        let _ = writeln!(output, "Generated proxy-groups written to: {path}");
    }
    if verbose && report.output.is_some() {
        let _ = writeln!(output, "  Proxies:  {}", report.names);
        let _ = writeln!(output, "  Groups:   {}", report.groups);
    }

    output
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Failure {
                success: bool,
                kind: &'static str,
                error: String,
            }
            format_json(&Failure {
                success: false,
                kind: error.kind(),
                error: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
