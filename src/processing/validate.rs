//! Required-column check for a loaded [`crate::types::Table`].

use crate::error::{PipelineError, PipelineResult};
use crate::types::Table;

/// Column positions resolved by [`validate_required_columns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndexes {
    pub category: usize,
    pub value: usize,
}

/// Confirm that `category` and `value` columns both exist in `table`.
///
/// Names are matched exactly. On failure the error names every missing column, in
/// `[category, value]` order.
pub fn validate_required_columns(
    table: &Table,
    category: &str,
    value: &str,
) -> PipelineResult<ColumnIndexes> {
    let category_idx = table.index_of(category);
    let value_idx = table.index_of(value);

    match (category_idx, value_idx) {
        (Some(category), Some(value)) => Ok(ColumnIndexes { category, value }),
        _ => {
            let missing = [(category, category_idx), (value, value_idx)]
                .into_iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name.to_owned())
                .collect();
            Err(PipelineError::MissingColumns { missing })
        }
    }
}
