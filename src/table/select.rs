//! Column projection: narrows a [`Table`] to an operator-supplied ordered
//! list of column names.

use crate::table::Table;
use thiserror::Error;

/// Errors raised while projecting the table onto the requested columns.
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("column '{0}' not found in input")]
    MissingColumn(String),

    #[error("no columns requested")]
    EmptySelection,
}

/// Returns a new [`Table`] holding only the named columns, in the given
/// order. Pure projection: the source table is untouched, and the first
/// requested name absent from the source fails the whole selection.
pub fn select_columns(table: &Table, names: &[String]) -> Result<Table, SelectionError> {
    if names.is_empty() {
        return Err(SelectionError::EmptySelection);
    }

    let mut columns = Vec::with_capacity(names.len());
    for name in names {
        let column = table
            .column(name)
            .ok_or_else(|| SelectionError::MissingColumn(name.clone()))?;
        columns.push(column.clone());
    }
    Ok(Table { columns })
}
