use thiserror::Error;

/// Main error type for the conversion pipeline.
/// Aggregates the per-stage errors plus the standard library errors raised
/// between stages; every variant is fatal to the run.
#[derive(Error, Debug)]
pub enum SheetPackError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Pipeline stage errors
    #[error("{0}")]
    LoadError(#[from] crate::table::loader::LoadError),

    #[error("{0}")]
    SelectionError(#[from] crate::table::select::SelectionError),

    #[error("{0}")]
    RenderError(#[from] crate::render::RenderError),

    #[error("{0}")]
    ArchiveError(#[from] crate::archive::ArchiveError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, SheetPackError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| SheetPackError::WithContextError(format!("{}: {}", message, e)))
    }
}
