//! In-memory processing stages.
//!
//! The stages run in order over a loaded [`crate::types::Table`]:
//!
//! - [`validate_required_columns()`]: fail fast when the category/value columns are absent
//! - [`clean_rows()`]: coerce the measure to numbers and drop rows that do not coerce
//! - [`aggregate_by_category()`]: sum the measure per category
//!
//! ## Example: validate → clean → aggregate
//!
//! ```rust
//! use category_totals::processing::{aggregate_by_category, clean_rows, validate_required_columns, OutputOrder};
//! use category_totals::types::{Cell, Table};
//!
//! let table = Table::new(
//!     vec!["Category".to_string(), "Value".to_string()],
//!     vec![
//!         vec![Cell::Text("A".to_string()), Cell::Text("10".to_string())],
//!         vec![Cell::Text("A".to_string()), Cell::Text("5".to_string())],
//!         vec![Cell::Text("B".to_string()), Cell::Text("N/A".to_string())],
//!     ],
//! );
//!
//! let idx = validate_required_columns(&table, "Category", "Value").unwrap();
//! let cleaned = clean_rows(&table, idx);
//! assert_eq!(cleaned.dropped, 1);
//!
//! let totals = aggregate_by_category(&cleaned.rows, OutputOrder::FirstOccurrence);
//! assert_eq!(totals.len(), 1);
//! assert_eq!(totals[0].total, 15.0);
//! ```

pub mod aggregate;
pub mod clean;
pub mod validate;

pub use aggregate::{aggregate_by_category, OutputOrder};
pub use clean::{clean_rows, coerce_number, Cleaned};
pub use validate::{validate_required_columns, ColumnIndexes};
