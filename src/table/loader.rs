//! CSV loading: parses a delimited text file into a [`Table`], inferring
//! scalar types from the text representation of each field.

use crate::table::{Column, Table, Value};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading the source CSV file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open '{path}': {source}")]
    Open { path: String, source: csv::Error },

    #[error("malformed CSV in '{path}': {source}")]
    Malformed { path: String, source: csv::Error },

    #[error("duplicate column name '{0}' in header row")]
    DuplicateColumn(String),
}

/// Reads a CSV file into a [`Table`], preserving column and row order.
///
/// Record widths are strict: a row with more or fewer fields than the header
/// is a [`LoadError::Malformed`], as is invalid UTF-8. Column names must be
/// unique for later selection by name to be well defined.
pub fn load_csv(path: &Path) -> Result<Table, LoadError> {
    let display = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .from_path(path)
        .map_err(|source| LoadError::Open { path: display.clone(), source })?;

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Malformed { path: display.clone(), source })?
        .clone();

    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(headers.len());
    for name in headers.iter() {
        if !seen.insert(name.to_owned()) {
            return Err(LoadError::DuplicateColumn(name.to_owned()));
        }
        columns.push(Column { name: name.to_owned(), values: Vec::new() });
    }

    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Malformed { path: display.clone(), source })?;
        for (index, field) in record.iter().enumerate() {
            columns[index].values.push(Value::parse(field));
        }
    }

    Ok(Table { columns })
}
