//! Batch summary formatting.

use crate::cli::OutputFormat;
use serde::Serialize;

/// One icon that failed and was skipped.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedIcon {
    /// The component identifier derived for the file.
    pub identifier: String,
    /// Why generation failed.
    pub reason: String,
}

/// Phase timing breakdown, only collected with `--timings`.
#[derive(Debug, Clone, Serialize)]
pub struct Timings {
    /// Time spent discovering source files.
    pub scan_ms: u128,
    /// Time spent parsing, analyzing, and emitting.
    pub generate_ms: u128,
    /// Time spent writing components and the index.
    pub write_ms: u128,
}

/// The result of one batch run.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    /// Number of components generated and written.
    pub generated: usize,
    /// Icons that were skipped, with reasons.
    pub skipped: Vec<SkippedIcon>,
    /// Number of export entries in the barrel index.
    pub index_entries: usize,
    /// Phase timings, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timings: Option<Timings>,
}

/// Formats batch summaries for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a summary.
    pub fn format(&self, summary: &BatchSummary) -> String {
        match self.format {
            OutputFormat::Human => Self::format_human(summary),
            OutputFormat::Json => {
                serde_json::to_string_pretty(summary).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
            }
        }
    }

    fn format_human(summary: &BatchSummary) -> String {
        let mut out = format!(
            "Generated {} components ({} index entries)",
            summary.generated, summary.index_entries
        );
        if !summary.skipped.is_empty() {
            out.push_str(&format!("\nSkipped {} icons:", summary.skipped.len()));
            for skip in &summary.skipped {
                out.push_str(&format!("\n  {}: {}", skip.identifier, skip.reason));
            }
        }
        if let Some(timings) = &summary.timings {
            out.push_str(&format!(
                "\nTimings: scan {}ms, generate {}ms, write {}ms",
                timings.scan_ms, timings.generate_ms, timings.write_ms
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> BatchSummary {
        BatchSummary {
            generated: 2,
            skipped: vec![SkippedIcon {
                identifier: "BrokenIcon".to_string(),
                reason: "malformed source: no <svg> opening tag found".to_string(),
            }],
            index_entries: 4,
            timings: None,
        }
    }

    #[test]
    fn test_human_format() {
        let out = Formatter::new(OutputFormat::Human).format(&summary());
        assert!(out.contains("Generated 2 components (4 index entries)"));
        assert!(out.contains("BrokenIcon: malformed source"));
    }

    #[test]
    fn test_json_format() {
        let out = Formatter::new(OutputFormat::Json).format(&summary());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["generated"], 2);
        assert_eq!(value["skipped"][0]["identifier"], "BrokenIcon");
        assert!(value.get("timings").is_none());
    }
}
