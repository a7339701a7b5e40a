//! Stage orchestration: wires the loader, selector, transformer, renderer and
//! archiver into one sequential run, and owns the derived naming convention
//! (`temp/<base>.xlsx`, `<base>.zip` moved beside the executable).

use crate::archive;
use crate::error::{ResultMessage, SheetPackError};
use crate::render;
use crate::table::{loader, select, transform};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Working directory for the intermediate workbook, created idempotently.
const TEMP_DIR: &str = "temp";

/// Runs the whole conversion pipeline for one input file and returns the
/// final archive path.
///
/// Stages execute strictly in order; the first fatal error halts the run
/// before any later stage touches the filesystem. Only per-cell timestamp
/// conversion failures are non-fatal (they degrade to empty cells).
pub fn run(input: &Path, columns: &[String]) -> Result<PathBuf, SheetPackError> {
    let base = input
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| {
            SheetPackError::WithContextError(format!("input path '{}' has no file name", input.display()))
        })?
        .to_owned();

    let table = loader::load_csv(input)?;
    let mut table = select::select_columns(&table, columns)?;
    info!(columns = table.columns.len(), rows = table.row_count(), "columns selected");

    transform::convert_timestamps(&mut table);
    transform::prettify_headers(&mut table);

    fs::create_dir_all(TEMP_DIR)
        .map_err(SheetPackError::from)
        .with_prefix("cannot create working directory")?;
    let workbook_path = Path::new(TEMP_DIR).join(format!("{base}.xlsx"));
    render::render_sheet(&table, &base, &workbook_path)?;
    info!(path = %workbook_path.display(), "workbook rendered");

    let archive_path = PathBuf::from(format!("{base}.zip"));
    archive::archive_file(&workbook_path, &archive_path)?;
    info!(path = %archive_path.display(), "zip file created");

    let destination = archive::relocate_beside_executable(&archive_path)?;
    info!(path = %destination.display(), "archive moved beside the executable");
    Ok(destination)
}
