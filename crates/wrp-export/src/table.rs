//! CSV serialization of the flattened review table.

use std::path::Path;

use crate::error::ExportError;
use crate::flatten::FlatReviewRow;

/// The fixed header row of the export.
pub const HEADER: [&str; 5] = ["Category", "Product Name", "Customer Name", "Rating", "Review"];

/// Writes the full ordered row sequence as CSV, header first. The table is
/// serialized to an in-memory buffer and the destination file is
/// overwritten in full only once serialization has succeeded.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] on serialization failure or
/// [`ExportError::Io`] if the destination cannot be written.
pub fn write_rows(rows: &[FlatReviewRow], path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let buffer = writer.into_inner().map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e.into_error(),
    })?;
    std::fs::write(path, buffer).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!(path = %path.display(), rows = rows.len(), "exported review table");
    Ok(())
}
