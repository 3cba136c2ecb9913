//! Core data model types.
//!
//! The loader produces a [`Table`] of [`Cell`]s; the cleaner turns it into [`CleanedRow`]s and the
//! aggregator folds those into [`AggregateEntry`] values.

use std::fmt;

/// A single cell in a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing/empty value.
    Missing,
    /// Numeric value.
    Number(f64),
    /// Raw text, not yet interpreted.
    Text(String),
}

impl Cell {
    /// Build a cell from a raw field: an empty field is [`Cell::Missing`], anything else
    /// (whitespace included) is kept verbatim as [`Cell::Text`].
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Cell::Missing
        } else {
            Cell::Text(raw.to_owned())
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Cell>>` in the same order as `columns`. The column set is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names, in header order.
    pub columns: Vec<String>,
    /// Row-major cell storage.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table from column names and rows.
    ///
    /// # Panics
    ///
    /// Panics if any row has a different length than `columns`.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        for (idx, row) in rows.iter().enumerate() {
            assert!(
                row.len() == columns.len(),
                "row {idx} length {} does not match column count {}",
                row.len(),
                columns.len()
            );
        }
        Self { columns, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// A row whose measure was successfully coerced to a number.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRow {
    /// Grouping key, compared by exact string equality.
    pub category: String,
    pub value: f64,
}

/// One `(category, total)` pair of the aggregated result.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateEntry {
    pub category: String,
    pub total: f64,
}
