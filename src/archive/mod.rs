//! ZIP archiving: packs the rendered workbook into a single-entry
//! deflate-compressed archive and relocates it next to the running
//! executable.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Errors raised while creating or relocating the archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("cannot read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("cannot create '{path}': {source}")]
    Create { path: String, source: io::Error },

    #[error("cannot move '{path}': {source}")]
    Move { path: String, source: io::Error },

    #[error("'{0}' has no file name to store in the archive")]
    NoFileName(String),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Writes a ZIP archive at `archive` containing exactly one entry: the file
/// at `source`, stored under its base name with directory components
/// discarded. No cleanup is attempted on failure; a failed run is retried
/// from scratch.
pub fn archive_file(source: &Path, archive: &Path) -> Result<(), ArchiveError> {
    let entry_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ArchiveError::NoFileName(source.display().to_string()))?;

    let mut reader = File::open(source).map_err(|source_error| ArchiveError::Read {
        path: source.display().to_string(),
        source: source_error,
    })?;
    let file = File::create(archive).map_err(|source_error| ArchiveError::Create {
        path: archive.display().to_string(),
        source: source_error,
    })?;

    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    writer.start_file(entry_name, options)?;
    io::copy(&mut reader, &mut writer)?;
    writer.finish()?;
    Ok(())
}

/// Moves `archive` into the directory containing the running executable and
/// returns its new path. If the executable path has no parent the archive is
/// left where it is.
pub fn relocate_beside_executable(archive: &Path) -> Result<PathBuf, ArchiveError> {
    let executable = std::env::current_exe()?;
    let Some(directory) = executable.parent() else {
        return Ok(archive.to_path_buf());
    };
    let file_name = archive
        .file_name()
        .ok_or_else(|| ArchiveError::NoFileName(archive.display().to_string()))?;
    let destination = directory.join(file_name);
    std::fs::rename(archive, &destination).map_err(|source| ArchiveError::Move {
        path: archive.display().to_string(),
        source,
    })?;
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn archive_holds_one_entry_under_the_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("nested").join("report.xlsx");
        std::fs::create_dir_all(source.parent().unwrap()).unwrap();
        std::fs::write(&source, b"workbook bytes").unwrap();

        let archive_path = dir.path().join("report.zip");
        archive_file(&source, &archive_path).unwrap();

        let mut archive = ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
        let mut entry = archive.by_index(0).unwrap();
        assert_eq!(entry.name(), "report.xlsx");

        let mut extracted = Vec::new();
        entry.read_to_end(&mut extracted).unwrap();
        assert_eq!(extracted, b"workbook bytes");
    }

    #[test]
    fn missing_source_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = archive_file(
            &dir.path().join("absent.xlsx"),
            &dir.path().join("absent.zip"),
        )
        .unwrap_err();
        assert!(matches!(error, ArchiveError::Read { .. }), "{error}");
    }

    #[test]
    fn unwritable_destination_is_a_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("report.xlsx");
        std::fs::write(&source, b"workbook bytes").unwrap();

        let error = archive_file(&source, &dir.path().join("no/such/dir/report.zip")).unwrap_err();
        assert!(matches!(error, ArchiveError::Create { .. }), "{error}");
    }
}
