use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The partition file does not exist. Recovered at the orchestrator
    /// (logged and skipped); every other variant is fatal.
    #[error("partition file not found: {path}")]
    PartitionNotFound { path: PathBuf },
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        source: PolarsError,
    },
    #[error("write {path}: {source}")]
    Write {
        path: PathBuf,
        source: PolarsError,
    },
    #[error("create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
