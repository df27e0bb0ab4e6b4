//! Error types for the influence timeline pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading `edges.csv`.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("CSV not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("No edges found in CSV at {}", .0.display())]
    Empty(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row at line {line}: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

impl InputError {
    /// Missing and empty inputs get a one-line diagnostic instead of a full
    /// error chain.
    pub fn is_clean_exit(&self) -> bool {
        matches!(self, InputError::NotFound(_) | InputError::Empty(_))
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to prepare output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize figure: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
