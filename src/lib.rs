//! # sheetpack
//!
//! A one-shot batch converter: reads a CSV file, keeps an operator-supplied
//! subset of columns, converts epoch-millisecond timestamps to GST display
//! strings, prettifies header names, renders the result as a styled XLSX
//! workbook and packs that workbook into a single-entry zip archive placed
//! next to the running executable.
//!
//! ## Pipeline
//!
//! Data flows strictly forward through five stages, each owning the table in
//! turn:
//!
//! 1. **Loader** ([`table::loader`]) — CSV file into an in-memory [`table::Table`]
//! 2. **Column Selector** ([`table::select`]) — ordered projection by name
//! 3. **Value Transformer** ([`table::transform`]) — timestamp and header passes
//! 4. **Spreadsheet Renderer** ([`render`]) — styled XLSX workbook
//! 5. **Archiver** ([`archive`]) — single-entry deflate zip, relocated
//!
//! Every stage error is fatal and halts the run; only individual timestamp
//! values that fail to parse are tolerated (they degrade to empty cells).

pub mod archive;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod table;

pub use crate::error::SheetPackError;
pub use crate::pipeline::run;
