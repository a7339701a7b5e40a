//! XLSX rendering: serializes a [`Table`] into a styled workbook.
//!
//! The visual layout is fixed: content is offset one blank row down and one
//! blank column right, every populated cell carries a thin border, the header
//! row is centered, data cells are centered with text wrap, column widths
//! track the longest text value, and the second populated column (the
//! transformed timestamp, positionally) gets a date-time number format.

use crate::table::{Table, Value};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::path::Path;
use thiserror::Error;

/// Errors raised while rendering or saving the workbook.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("sheet '{0}' has no columns to render")]
    EmptySheet(String),

    #[error("{0}")]
    Xlsx(#[from] XlsxError),
}

/// Number format applied to the timestamp column's data cells.
const TIMESTAMP_NUMBER_FORMAT: &str = "dd-mm-yyyy hh:mm:ss";

/// Padding and scale used when deriving a column width from its longest value.
const WIDTH_PADDING: f64 = 2.0;
const WIDTH_FACTOR: f64 = 1.2;

/// Renders `table` as a single styled sheet named `sheet_name` and saves the
/// workbook to `path`, overwriting any existing file.
pub fn render_sheet(table: &Table, sheet_name: &str, path: &Path) -> Result<(), RenderError> {
    if table.columns.is_empty() {
        return Err(RenderError::EmptySheet(sheet_name.to_owned()));
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let body = header.clone().set_text_wrap();
    let timestamp = body.clone().set_num_format(TIMESTAMP_NUMBER_FORMAT);

    // Content starts at sheet row 2 / column B: the leading row and column
    // stay blank, shifting the whole grid down and right by one.
    for (index, column) in table.columns.iter().enumerate() {
        let col = (index + 1) as u16;
        worksheet.write_with_format(1, col, column.name.as_str(), &header)?;

        // The timestamp display format is positional: it always lands on the
        // first table column (sheet column B), name notwithstanding.
        let data_format = if index == 0 { &timestamp } else { &body };
        for (row_index, value) in column.values.iter().enumerate() {
            let row = (row_index + 2) as u32;
            match value {
                Value::Null => worksheet.write_blank(row, col, data_format)?,
                Value::Number(number) => worksheet.write_with_format(row, col, *number, data_format)?,
                Value::Text(text) => worksheet.write_with_format(row, col, text.as_str(), data_format)?,
            };
        }
    }

    // The blank spacer column keeps the floor width of an unmeasured column.
    worksheet.set_column_width(0, WIDTH_PADDING * WIDTH_FACTOR)?;
    for (index, column) in table.columns.iter().enumerate() {
        let mut max_length = column.name.chars().count();
        for value in &column.values {
            if let Some(length) = value.measure() {
                max_length = max_length.max(length);
            }
        }
        let width = (max_length as f64 + WIDTH_PADDING) * WIDTH_FACTOR;
        worksheet.set_column_width((index + 1) as u16, width)?;
    }

    workbook.save(path)?;
    Ok(())
}
