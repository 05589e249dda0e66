//! Canonical output artifact writing.

use std::fs::File;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use crate::error::{IngestError, Result};

/// Write the canonical dataset to a CSV file.
pub fn write_output(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| IngestError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(df)
        .map_err(|source| IngestError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), rows = df.height(), "wrote canonical dataset");
    Ok(())
}
