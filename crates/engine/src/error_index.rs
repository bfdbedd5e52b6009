//! Derived lookup over validator output.
//!
//! Built in one pass from the error list; the UI asks "does cell (r, c)
//! have an error" per visible cell, which must not be a scan. The index
//! is a read-only view: after any change to rows or schema, re-run
//! `validate` and build a fresh index. There is no cell-by-cell patching.

use rustc_hash::FxHashMap;

use crate::validate::ValidationError;

/// O(1) lookup of validation errors by (row, col).
#[derive(Debug, Clone, Default)]
pub struct ErrorIndex {
    errors: Vec<ValidationError>,
    /// Positions into `errors` per cell, in discovery order.
    by_cell: FxHashMap<(usize, usize), Vec<usize>>,
}

impl ErrorIndex {
    /// Build an index from validator output. Reflects exactly the
    /// errors passed in — no filtering, no deduplication.
    pub fn build(errors: Vec<ValidationError>) -> Self {
        let mut by_cell: FxHashMap<(usize, usize), Vec<usize>> = FxHashMap::default();
        for (pos, err) in errors.iter().enumerate() {
            by_cell.entry((err.row, err.col)).or_default().push(pos);
        }
        Self { errors, by_cell }
    }

    /// The first error (in discovery order) at a cell, if any.
    pub fn error_at(&self, row: usize, col: usize) -> Option<&ValidationError> {
        self.by_cell
            .get(&(row, col))
            .and_then(|positions| positions.first())
            .map(|&pos| &self.errors[pos])
    }

    /// All errors at a cell, in discovery order. Empty when clean —
    /// a cell only collects several when duplicate rules target it.
    pub fn errors_at(&self, row: usize, col: usize) -> Vec<&ValidationError> {
        match self.by_cell.get(&(row, col)) {
            Some(positions) => positions.iter().map(|&pos| &self.errors[pos]).collect(),
            None => Vec::new(),
        }
    }

    pub fn has_error_at(&self, row: usize, col: usize) -> bool {
        self.by_cell.contains_key(&(row, col))
    }

    /// The full error list, in discovery order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
