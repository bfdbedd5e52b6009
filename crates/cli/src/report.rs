//! Structured validation reports.
//!
//! One shape serves both output modes: human output prints one line per
//! error in A1 addressing, `--json` serializes the whole report for
//! machine consumers.

use serde::Serialize;

use tearsheet_engine::labels::cell_ref;
use tearsheet_engine::validate::ValidationError;

/// One error entry with both coordinate forms.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// A1-style address, e.g. "B3".
    pub cell: String,
    pub row: usize,
    pub col: usize,
    pub message: String,
}

/// Full result of one validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    /// Total errors found, before any `--max-errors` truncation.
    pub error_count: usize,
    /// True when `errors` holds fewer entries than `error_count`.
    pub truncated: bool,
    pub errors: Vec<ReportEntry>,
}

impl ValidationReport {
    /// Build a report, keeping at most `max_errors` entries when set.
    pub fn build(errors: &[ValidationError], max_errors: Option<usize>) -> Self {
        let error_count = errors.len();
        let keep = max_errors.unwrap_or(error_count).min(error_count);

        let entries = errors[..keep]
            .iter()
            .map(|e| ReportEntry {
                cell: cell_ref(e.row, e.col),
                row: e.row,
                col: e.col,
                message: e.message.clone(),
            })
            .collect();

        Self {
            ok: error_count == 0,
            error_count,
            truncated: keep < error_count,
            errors: entries,
        }
    }

    /// Human-readable lines: `<A1-ref>: <message>`, plus a summary.
    pub fn human_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.cell, e.message))
            .collect();

        if self.ok {
            lines.push("No validation errors.".to_string());
        } else if self.truncated {
            lines.push(format!(
                "{} validation errors ({} shown).",
                self.error_count,
                self.errors.len()
            ));
        } else {
            lines.push(format!("{} validation errors.", self.error_count));
        }

        lines
    }
}
