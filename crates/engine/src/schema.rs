//! Column schema: one rule per target column.
//!
//! A schema is an ordered list of rules. Rule order is validation order.
//! Duplicate column indices are allowed — each rule is evaluated
//! independently against the same cell and all of them must pass.

use serde::{Deserialize, Serialize};

/// Declared data type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    Boolean,
    Date,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Text => write!(f, "Text"),
            ColumnType::Number => write!(f, "Number"),
            ColumnType::Boolean => write!(f, "Boolean"),
            ColumnType::Date => write!(f, "Date"),
        }
    }
}

/// One column's validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Target column position (0-based).
    pub index: usize,
    /// Display name, used in error messages.
    pub name: String,
    /// Declared type checked against non-empty cells.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// If true, an empty/absent cell is an error.
    pub required: bool,
}

impl ColumnSchema {
    /// Create an optional column rule.
    pub fn new(index: usize, name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            index,
            name: name.into(),
            column_type,
            required: false,
        }
    }

    /// Mark the column as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Ordered collection of column rules.
///
/// Owned by the surrounding application and passed by reference into the
/// validator on every change. Holds no derived state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaStore {
    columns: Vec<ColumnSchema>,
}

impl SchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: Vec<ColumnSchema>) -> Self {
        Self { columns }
    }

    /// Append a rule. Order of insertion is order of evaluation.
    pub fn add(&mut self, column: ColumnSchema) {
        self.columns.push(column);
    }

    /// Remove the rule at list position `pos` (not column index).
    /// Returns the removed rule if the position was valid.
    pub fn remove(&mut self, pos: usize) -> Option<ColumnSchema> {
        if pos < self.columns.len() {
            Some(self.columns.remove(pos))
        } else {
            None
        }
    }

    /// Replace the rule at list position `pos`.
    /// Returns false if the position is out of range.
    pub fn replace(&mut self, pos: usize, column: ColumnSchema) -> bool {
        match self.columns.get_mut(pos) {
            Some(slot) => {
                *slot = column;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.columns.iter()
    }

    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }
}
