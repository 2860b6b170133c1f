//! JSON report output.
//!
//! Writes the normalized routes as pretty JSON, ready to replace the static
//! `StandardRoutes.json` file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::routes::types::StandardRoutes;

/// Errors that can occur while writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serialize `data` as pretty JSON plus a trailing newline.
pub fn write_json<W: Write>(data: &StandardRoutes, mut writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, data)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write the report to `path`, or stdout when no path is given.
pub fn write_report(data: &StandardRoutes, path: Option<&Path>) -> Result<(), ReportError> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            write_json(data, BufWriter::new(file))?;
            tracing::info!(path = %path.display(), "Report written");
        }
        None => {
            let stdout = io::stdout();
            write_json(data, stdout.lock())?;
        }
    }
    Ok(())
}
