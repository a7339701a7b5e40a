//! Value transformation passes: epoch-millisecond timestamps to GST display
//! strings, and raw header labels to human-readable names. Both passes rewrite
//! the table in place and leave column positions untouched.

use crate::table::{Table, Value};
use chrono::{DateTime, Duration};
use tracing::warn;

/// Fixed display offset from UTC; the data source reports in GST (UTC+4).
pub const GST_OFFSET_HOURS: i64 = 4;

/// Namespace prefix stripped from exported header labels.
pub const NAMESPACE_PREFIX: &str = "json.";

/// Column whose values are interpreted as epoch milliseconds.
const TIMESTAMP_COLUMN: &str = "timestamp";

/// strftime pattern for the GST display string.
const DISPLAY_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Rewrites the `timestamp` column, if present, from epoch milliseconds (UTC)
/// to `DD-MM-YYYY HH:MM:SS` strings in GST.
///
/// Conversion is fallible per value: a cell that cannot be read as
/// milliseconds logs a warning and becomes [`Value::Null`] without aborting
/// the run. All other columns are untouched.
pub fn convert_timestamps(table: &mut Table) {
    let Some(column) = table.column_mut(TIMESTAMP_COLUMN) else {
        return;
    };
    for (row, value) in column.values.iter_mut().enumerate() {
        *value = match to_gst_string(value) {
            Some(text) => Value::Text(text),
            None => {
                warn!(row, value = %value, "timestamp is not epoch milliseconds, leaving cell empty");
                Value::Null
            }
        };
    }
}

/// Converts one cell to its GST display string.
/// Numbers are taken as-is; text is parsed as a float first.
fn to_gst_string(value: &Value) -> Option<String> {
    let millis = match value {
        Value::Number(number) => *number,
        Value::Text(text) => text.trim().parse::<f64>().ok()?,
        Value::Null => return None,
    };
    if !millis.is_finite() {
        return None;
    }
    let utc = DateTime::from_timestamp_millis(millis as i64)?;
    let gst = utc.checked_add_signed(Duration::hours(GST_OFFSET_HOURS))?;
    Some(gst.format(DISPLAY_FORMAT).to_string())
}

/// Rewrites every header except the first into its display form:
/// the `json.` namespace prefix removed, underscores replaced with spaces,
/// and each word title-cased. Idempotent under re-application.
pub fn prettify_headers(table: &mut Table) {
    for column in table.columns.iter_mut().skip(1) {
        column.name = display_name(&column.name);
    }
}

/// Display form of a single raw header label.
pub fn display_name(name: &str) -> String {
    let name = name.replace(NAMESPACE_PREFIX, "").replace('_', " ");
    title_case(&name)
}

/// Uppercases the first letter of each whitespace-separated word and
/// lowercases the rest, preserving the whitespace itself.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut start_of_word = true;
    for character in text.chars() {
        if character.is_whitespace() {
            start_of_word = true;
            result.push(character);
        } else if start_of_word {
            result.extend(character.to_uppercase());
            start_of_word = false;
        } else {
            result.extend(character.to_lowercase());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn timestamp_table(values: Vec<Value>) -> Table {
        Table {
            columns: vec![Column { name: "timestamp".to_owned(), values }],
        }
    }

    #[test]
    fn epoch_millis_become_gst_display_strings() {
        // 1700000000000 ms = 2023-11-14 22:13:20 UTC, i.e. 02:13:20 next day in GST.
        let mut table = timestamp_table(vec![
            Value::Number(1_700_000_000_000f64),
            Value::Text("1700000000000".to_owned()),
        ]);
        convert_timestamps(&mut table);
        let expected = Value::Text("15-11-2023 02:13:20".to_owned());
        assert_eq!(table.columns[0].values[0], expected);
        assert_eq!(table.columns[0].values[1], expected);
    }

    #[test]
    fn unparsable_timestamps_degrade_to_null() {
        let mut table = timestamp_table(vec![
            Value::Text("not a number".to_owned()),
            Value::Null,
            Value::Number(f64::NAN),
            Value::Number(9e18),
        ]);
        convert_timestamps(&mut table);
        for value in &table.columns[0].values {
            assert_eq!(*value, Value::Null);
        }
    }

    #[test]
    fn tables_without_a_timestamp_column_are_untouched() {
        let mut table = Table {
            columns: vec![Column {
                name: "created_at".to_owned(),
                values: vec![Value::Number(1_700_000_000_000f64)],
            }],
        };
        let before = table.clone();
        convert_timestamps(&mut table);
        assert_eq!(table, before);
    }

    #[test]
    fn headers_are_prettified_except_the_first() {
        let mut table = Table {
            columns: ["timestamp", "json.user_name", "json.event_type", "plain"]
                .iter()
                .map(|name| Column { name: (*name).to_owned(), values: Vec::new() })
                .collect(),
        };
        prettify_headers(&mut table);
        let names: Vec<&str> = table.columns.iter().map(|column| column.name.as_str()).collect();
        assert_eq!(names, ["timestamp", "User Name", "Event Type", "Plain"]);
    }

    #[test]
    fn display_name_is_idempotent() {
        let once = display_name("json.user_name");
        assert_eq!(once, "User Name");
        assert_eq!(display_name(&once), once);
        assert_eq!(display_name("ALREADY Upper"), "Already Upper");
    }
}
