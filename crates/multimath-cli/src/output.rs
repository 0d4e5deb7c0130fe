//! Output formatting and status reporting

use crate::error::CliResult;
use console::{style, Term};
use multimath::calc::{CalcResult, Value};
use multimath::population::ChoroplethLayer;
use multimath::simulate::FrequencyTable;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Status line writer on stderr
///
/// Results go to stdout through the render functions below; this only
/// carries notes and failures, so piping stdout stays clean.
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a failure message
    pub fn failure(&self, message: &str) {
        // Always print failures, even in quiet mode
        let prefix = if self.use_color {
            style("✗").red().bold().to_string()
        } else {
            "ERROR".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("⚠").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("ℹ").blue().bold().to_string()
        } else {
            "INFO".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }
}

/// Machine-readable error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Symbolic code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// One calculation as emitted in JSON mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcReport {
    /// Display line or error sentinel
    pub display: String,
    /// Result, when successful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error, when rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl CalcReport {
    /// Builds a report from a session display and its outcome
    #[must_use]
    pub fn new(display: &str, outcome: &CalcResult<Value>) -> Self {
        match outcome {
            Ok(value) => Self {
                display: display.to_string(),
                result: Some(*value),
                error: None,
            },
            Err(err) => Self {
                display: display.to_string(),
                result: None,
                error: Some(ErrorReport {
                    code: err.code().to_string(),
                    message: err.to_string(),
                }),
            },
        }
    }

    /// A display change with no calculation behind it, e.g. after `clear`
    #[must_use]
    pub fn display_only(display: &str) -> Self {
        Self {
            display: display.to_string(),
            result: None,
            error: None,
        }
    }

    /// Writes the display line (text) or the whole report (JSON)
    pub fn write_to<W: std::io::Write>(&self, format: OutputFormat, out: &mut W) -> CliResult<()> {
        match format {
            OutputFormat::Text => writeln!(out, "{}", self.display)?,
            OutputFormat::Json => writeln!(out, "{}", render_json(self)?)?,
        }
        Ok(())
    }
}

/// Frequency table as aligned text
#[must_use]
pub fn render_frequency_table(table: &FrequencyTable, use_color: bool) -> String {
    let title = format!("{} simulation, {} trials", table.space, table.trials);
    let mut out = if use_color {
        format!("{}\n", style(title).bold())
    } else {
        format!("{title}\n")
    };

    out.push_str(&format!(
        "{:<8} {:>8} {:>10}\n",
        "outcome", "count", "relative"
    ));
    for row in &table.rows {
        out.push_str(&format!(
            "{:<8} {:>8} {:>10.3}\n",
            row.label, row.count, row.relative_frequency
        ));
    }
    out.push_str(&format!(
        "theoretical probability {:.3}, largest deviation {:.3}\n",
        table.space.probability(),
        table.max_deviation()
    ));
    out
}

/// Choropleth legend, optionally followed by every region
#[must_use]
pub fn render_layer(layer: &ChoroplethLayer, show_regions: bool, use_color: bool) -> String {
    let mut out = if use_color {
        format!("{}\n", style(&layer.title).bold())
    } else {
        format!("{}\n", layer.title)
    };

    let width = layer
        .legend
        .iter()
        .map(|l| l.label.chars().count())
        .max()
        .unwrap_or(0);
    for entry in &layer.legend {
        let pad = width - entry.label.chars().count();
        out.push_str(&format!(
            "  {}{} {:>5} regions\n",
            entry.label,
            " ".repeat(pad),
            entry.regions
        ));
    }
    let unclassified = layer.unclassified();
    if unclassified > 0 {
        out.push_str(&format!("  ({unclassified} regions without a range)\n"));
    }

    if show_regions {
        out.push('\n');
        for region in &layer.regions {
            let value = region
                .value
                .map_or_else(|| "-".to_string(), |v| v.to_string());
            out.push_str(&format!(
                "{:<4} {:<32} {:>14} {}\n",
                region.code,
                region.country,
                value,
                region.range.as_deref().unwrap_or("-")
            ));
        }
    }
    out
}

/// Serializes any result to a single JSON line
pub fn render_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}
