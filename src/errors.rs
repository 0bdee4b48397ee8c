use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a coverage report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Coverage report not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid coverage report: {0}")]
    Format(String),

    #[error("Could not read coverage report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn format(message: impl Into<String>) -> Self {
        ReportError::Format(message.into())
    }
}
