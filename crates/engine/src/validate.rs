//! Schema-driven row validation.
//!
//! `validate` is a pure function: rows + schema in, error list out. It
//! never mutates its inputs and holds no state, so callers re-run it
//! (and rebuild the [`ErrorIndex`](crate::error_index::ErrorIndex))
//! after every change to rows or schema rather than patching old output.
//!
//! ## Policy
//!
//! - A zero-cell row against a non-empty schema is skipped entirely:
//!   blank rows are intentional, not ten missing fields.
//! - Required check short-circuits the type check — an empty required
//!   cell reports exactly one error.
//! - An empty optional cell is valid regardless of declared type.
//! - A failed parse is a reported error, never a panic. One bad cell
//!   never stops the remaining rows or rules from being checked.

use serde::{Deserialize, Serialize};

use crate::cell::{CellValue, RowData};
use crate::schema::{ColumnType, SchemaStore};

/// One rule violation at a cell, addressed by row/column index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Row index (0-based).
    pub row: usize,
    /// Column index (0-based) — the rule's target column.
    pub col: usize,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    pub fn new(row: usize, col: usize, message: impl Into<String>) -> Self {
        Self {
            row,
            col,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", crate::labels::cell_ref(self.row, self.col), self.message)
    }
}

/// Validate every row against every schema rule, in order.
///
/// Outer loop over rows, inner loop over rules, so error discovery
/// order is row-major and deterministic. Duplicate rule indices mean
/// multiple rules check the same cell; each failure reports separately.
pub fn validate(rows: &[RowData], schema: &SchemaStore) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        // Intentionally blank row, not an error.
        if row.is_empty() && !schema.is_empty() {
            continue;
        }

        for rule in schema.iter() {
            let cell = row.get(rule.index).cloned().unwrap_or(CellValue::Absent);
            let cell_text = cell.canonical_text();

            if cell_text.is_empty() {
                if rule.required {
                    errors.push(ValidationError::new(
                        row_idx,
                        rule.index,
                        format!("Column '{}' is required but was empty.", rule.name),
                    ));
                }
                // Absence is valid for optional columns; either way the
                // type check never sees an empty cell.
                continue;
            }

            if let Some(message) = type_check(&cell_text, &cell, rule.column_type) {
                errors.push(ValidationError::new(row_idx, rule.index, message));
            }
        }
    }

    errors
}

/// Check a non-empty cell against a declared type.
/// Returns the error message on failure.
fn type_check(cell_text: &str, cell: &CellValue, column_type: ColumnType) -> Option<String> {
    match column_type {
        ColumnType::Text => None,
        ColumnType::Number => {
            if parse_number(cell_text).is_some() {
                None
            } else {
                Some(format!("Expected a Number, got '{}'.", cell.raw_display()))
            }
        }
        ColumnType::Boolean => {
            if is_boolean_text(cell_text) {
                None
            } else {
                Some(format!(
                    "Expected Boolean (true/false), got '{}'.",
                    cell.raw_display()
                ))
            }
        }
        ColumnType::Date => {
            if parse_date(cell_text).is_some() {
                None
            } else {
                Some(format!("Expected a valid Date, got '{}'.", cell.raw_display()))
            }
        }
    }
}

/// Parse text as a numeric literal (integer, decimal, or scientific).
///
/// Leading `+` is allowed. `inf`/`nan` parse as f64 but are not numeric
/// literals in any tabular source, so they are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// Accepted boolean spellings, matched on the lower-cased trimmed text.
pub fn is_boolean_text(text: &str) -> bool {
    matches!(
        text.trim().to_lowercase().as_str(),
        "true" | "false" | "1" | "0" | "yes" | "no"
    )
}

/// Parse text as a calendar date or timestamp.
///
/// Permissive by design: ISO-8601 dates are the baseline, plus the
/// timestamp and regional forms that show up in real exports. Formats
/// with day/month fields go through chrono, so impossible dates
/// (2023-02-30) fail here rather than passing as "looks date-shaped."
pub fn parse_date(text: &str) -> Option<chrono::NaiveDateTime> {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Full RFC 3339 timestamp with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }

    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}
