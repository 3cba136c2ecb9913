//! Numeric coercion of the measure column and removal of unusable rows.

use crate::types::{Cell, CleanedRow, Table};

use super::validate::ColumnIndexes;

/// Coerce a cell to a number.
///
/// Returns `None` (the missing marker) for anything that is not a finite number: arbitrary text,
/// blanks, `NA`-style markers, and `NaN`/`inf` spellings. Never fails.
pub fn coerce_number(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(v) if v.is_finite() => Some(*v),
        Cell::Number(_) | Cell::Missing => None,
        Cell::Text(raw) => raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}

/// Result of [`clean_rows`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cleaned {
    /// Rows that survived coercion, in input order.
    pub rows: Vec<CleanedRow>,
    /// Number of rows discarded.
    pub dropped: usize,
}

/// Produce the cleaned rows of a validated `table`.
///
/// A row is dropped when its measure does not coerce to a number or its category cell is empty.
/// Other columns are ignored. An all-dropped table yields an empty result, not an error.
pub fn clean_rows(table: &Table, idx: ColumnIndexes) -> Cleaned {
    let mut rows = Vec::with_capacity(table.row_count());
    let mut dropped = 0;

    for (row_idx0, row) in table.rows.iter().enumerate() {
        let category = row.get(idx.category).unwrap_or(&Cell::Missing);
        let value = row.get(idx.value).and_then(coerce_number);

        match (category, value) {
            (Cell::Missing, _) | (_, None) => {
                // 1-based, plus the header line.
                tracing::debug!(line = row_idx0 + 2, "dropping row");
                dropped += 1;
            }
            (category, Some(value)) => rows.push(CleanedRow {
                category: category.to_string(),
                value,
            }),
        }
    }

    Cleaned { rows, dropped }
}

#[cfg(test)]
mod tests {
    use super::{clean_rows, coerce_number};
    use crate::processing::validate::ColumnIndexes;
    use crate::types::{Cell, CleanedRow, Table};

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn coerces_numeric_literals() {
        assert_eq!(coerce_number(&text("10")), Some(10.0));
        assert_eq!(coerce_number(&text("-3.25")), Some(-3.25));
        assert_eq!(coerce_number(&text(" 7 ")), Some(7.0));
        assert_eq!(coerce_number(&text("1e3")), Some(1000.0));
        assert_eq!(coerce_number(&Cell::Number(2.5)), Some(2.5));
    }

    #[test]
    fn non_numeric_cells_become_missing() {
        for raw in ["N/A", "NA", "null", "abc", "", "12abc", "NaN", "inf", "-infinity"] {
            assert_eq!(coerce_number(&text(raw)), None, "raw={raw:?}");
        }
        assert_eq!(coerce_number(&Cell::Missing), None);
        assert_eq!(coerce_number(&Cell::Number(f64::NAN)), None);
    }

    #[test]
    fn drops_rows_with_missing_measure_or_key() {
        let t = Table::new(
            vec!["Category".to_string(), "Value".to_string(), "Note".to_string()],
            vec![
                vec![text("A"), text("10"), text("x")],
                vec![text("B"), text("N/A"), Cell::Missing],
                vec![Cell::Missing, text("4"), Cell::Missing],
                vec![text("B"), Cell::Number(3.0), Cell::Missing],
            ],
        );
        let out = clean_rows(&t, ColumnIndexes { category: 0, value: 1 });

        assert_eq!(out.dropped, 2);
        assert_eq!(
            out.rows,
            vec![
                CleanedRow { category: "A".to_string(), value: 10.0 },
                CleanedRow { category: "B".to_string(), value: 3.0 },
            ]
        );
        // Original unchanged
        assert_eq!(t.row_count(), 4);
    }

    #[test]
    fn all_rows_dropped_is_not_an_error() {
        let t = Table::new(
            vec!["Category".to_string(), "Value".to_string()],
            vec![vec![text("A"), text("N/A")], vec![text("B"), text("N/A")]],
        );
        let out = clean_rows(&t, ColumnIndexes { category: 0, value: 1 });
        assert!(out.rows.is_empty());
        assert_eq!(out.dropped, 2);
    }
}
