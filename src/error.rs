//! Error types shared by the loader, detector and writers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricFtError {
    #[error("input not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("malformed array {}: {reason}", path.display())]
    MalformedArray { path: PathBuf, reason: String },

    #[error("empty series: at least one frame is required")]
    EmptyInput,

    #[error("failed to write {}: {source}", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin}:{line} {reason}")]
    InstructionTable {
        origin: String,
        line: usize,
        reason: String,
    },
}

impl MetricFtError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedArray {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MetricFtError>;
