use crate::errors::{AppError, AppResult};
use crate::models::OutputFormat;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tracing::info;

/// Writes the prepared table to `path`, creating parent directories as needed.
///
/// Returns the size of the written file in bytes.
///
/// # Errors
///
/// Returns `IoError` if the directory or file cannot be created, and `TableError`
/// if the table cannot be serialized in the requested format.
pub fn write_table(df: &mut DataFrame, path: &Path, format: OutputFormat) -> AppResult<u64> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::IoError(format!(
                "Failed to create output directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let mut file = File::create(path).map_err(|e| {
        AppError::IoError(format!("Failed to create output file {}: {e}", path.display()))
    })?;

    match format {
        OutputFormat::Parquet => {
            ParquetWriter::new(&mut file).finish(df)?;
        }
        OutputFormat::Csv => {
            CsvWriter::new(&mut file).finish(df)?;
        }
    }

    let bytes = fs::metadata(path)
        .map_err(|e| {
            AppError::IoError(format!(
                "Failed to read output file metadata {}: {e}",
                path.display()
            ))
        })?
        .len();

    info!(
        path = %path.display(),
        format = format.display_name(),
        rows = df.height(),
        bytes = bytes,
        "Table written"
    );
    Ok(bytes)
}
