use serde::{Deserialize, Serialize};

/// A single cell value in an imported grid.
///
/// `Absent` is the only representation of "no value" — it covers an
/// explicit null in the source data as well as a column index beyond the
/// end of a short row. An empty `Text` cell and `Absent` are distinct
/// values, but both count as "missing" for required-field checks (their
/// canonical text is empty either way).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Absent,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Absent
    }
}

impl CellValue {
    /// Build a cell from one imported field.
    ///
    /// Whitespace-only fields become `Absent`. Literal `true`/`false`
    /// (any case) become `Bool`, numeric literals become `Number`,
    /// everything else is kept as trimmed text.
    pub fn from_field(input: &str) -> Self {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return CellValue::Absent;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Bool(false);
        }

        if let Ok(num) = trimmed.parse::<f64>() {
            if num.is_finite() {
                return CellValue::Number(num);
            }
        }

        CellValue::Text(trimmed.to_string())
    }

    /// The value as the user would see it. Empty string for `Absent`.
    pub fn raw_display(&self) -> String {
        match self {
            CellValue::Absent => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// Canonical text form used by validation: `raw_display` trimmed of
    /// surrounding whitespace. Empty for `Absent` and for blank text.
    pub fn canonical_text(&self) -> String {
        match self {
            CellValue::Absent => String::new(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// True when the cell holds no usable value (absent or blank text).
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Absent => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// Integral numbers print without a fractional part: 101 not 101.0.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// One imported row: cell values indexed by column position.
/// Rows are not required to have uniform length.
pub type RowData = Vec<CellValue>;
