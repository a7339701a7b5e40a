//! In-memory columnar table model.
//! The whole dataset is held in memory for the duration of a run; columns own
//! their values and preserve source row order through every pipeline stage.

pub mod loader;
pub mod select;
pub mod transform;

use std::fmt::Display;

/// A single scalar cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Empty cell
    Null,
    /// Numeric values, including epoch-millisecond timestamps
    Number(f64),
    /// Everything that is not empty and not numeric
    Text(String),
}

impl Value {
    /// Parses a raw CSV field into a value.
    /// Empty fields become `Null`, fields that parse as `f64` become `Number`.
    pub fn parse(field: &str) -> Self {
        if field.is_empty() {
            Value::Null
        } else if let Ok(number) = field.parse::<f64>() {
            Value::Number(number)
        } else {
            Value::Text(field.to_owned())
        }
    }

    /// Character length of the value's text form, if it has one.
    /// Only text cells are measurable; numbers and empty cells are skipped
    /// when column widths are computed.
    pub fn measure(&self) -> Option<usize> {
        match self {
            Value::Text(text) => Some(text.chars().count()),
            Value::Number(_) | Value::Null => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Number(number) => write!(f, "{}", number),
            Value::Text(text) => write!(f, "{}", text),
        }
    }
}

/// A named column and its values, in source row order.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Column name (from the CSV header row)
    pub name: String,
    /// Cell values, one per source row
    pub values: Vec<Value>,
}

/// An ordered collection of equal-length named columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    /// Columns in source (or selection) order
    pub columns: Vec<Column>,
}

impl Table {
    /// Number of data rows (all columns are equal length).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.values.len())
    }

    /// Looks up a column by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Looks up a column by exact name for in-place mutation.
    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classifies_fields() {
        assert_eq!(Value::parse(""), Value::Null);
        assert_eq!(Value::parse("1700000000000"), Value::Number(1_700_000_000_000f64));
        assert_eq!(Value::parse("-2.5"), Value::Number(-2.5));
        assert_eq!(Value::parse("alice"), Value::Text("alice".to_owned()));
        assert_eq!(Value::parse("12ab"), Value::Text("12ab".to_owned()));
    }

    #[test]
    fn only_text_is_measurable() {
        assert_eq!(Value::parse("héllo").measure(), Some(5));
        assert_eq!(Value::parse("42").measure(), None);
        assert_eq!(Value::Null.measure(), None);
    }

    #[test]
    fn row_count_follows_first_column() {
        let table = Table {
            columns: vec![Column {
                name: "a".to_owned(),
                values: vec![Value::Null, Value::Number(1.0)],
            }],
        };
        assert_eq!(table.row_count(), 2);
        assert_eq!(Table::default().row_count(), 0);
    }
}
