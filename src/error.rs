use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Convenience result type for pipeline stages.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type returned by every pipeline stage.
///
/// The first error short-circuits the run and is reported through [`ErrorReport`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input path does not resolve to a file.
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// One or more required columns are absent from the header.
    #[error("Missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// The input has no header line at all.
    #[error("input has no header row: {}", path.display())]
    EmptyInput { path: PathBuf },

    /// Underlying I/O error other than a missing file (e.g. permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited content (ragged rows, invalid UTF-8, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The result could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Public error labels, as they appear in the `error` field of an [`ErrorReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    FileNotFound,
    MissingColumns,
    UnexpectedError,
}

impl PipelineError {
    /// Map this error onto the public label set.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::FileNotFound { .. } => ErrorKind::FileNotFound,
            PipelineError::MissingColumns { .. } => ErrorKind::MissingColumns,
            PipelineError::EmptyInput { .. }
            | PipelineError::Io(_)
            | PipelineError::Csv(_)
            | PipelineError::Serialize(_) => ErrorKind::UnexpectedError,
        }
    }
}

/// Structured failure document: `{"error": <kind>, "message": <detail>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: ErrorKind,
    pub message: String,
}

impl From<&PipelineError> for ErrorReport {
    fn from(err: &PipelineError) -> Self {
        Self {
            error: err.kind(),
            message: err.to_string(),
        }
    }
}
