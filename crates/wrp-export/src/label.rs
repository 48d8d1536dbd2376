//! Binary labeling pass over the exported review table.
//!
//! Reads the CSV back, derives a `label` column from the `Rating` column
//! (1 for ratings above the threshold, else 0), and rewrites the same file
//! in place. Ratings that do not parse as numbers (including the `"N/A"`
//! substituted for absent ratings) are labeled 0 explicitly and counted,
//! never coerced. Re-running the pass on an already-labeled file recomputes
//! the existing column instead of appending a second one.

use std::path::Path;

use crate::error::ExportError;

/// Ratings strictly above this are labeled positive.
const LABEL_THRESHOLD: f64 = 3.0;

/// Accounting for one labeling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSummary {
    pub rows: usize,
    pub positive: usize,
    /// Rows whose rating did not parse as a number and were labeled 0.
    pub non_numeric: usize,
}

/// Applies the labeling pass to the table at `path`, rewriting it in
/// place. The rewritten table is built fully in memory; the file is only
/// overwritten once the whole pass has succeeded.
///
/// # Errors
///
/// - [`ExportError::Csv`] — the file is not readable as CSV.
/// - [`ExportError::MissingColumn`] — no `Rating` column in the header.
/// - [`ExportError::Io`] — the rewritten table cannot be persisted.
pub fn apply_labels(path: &Path) -> Result<LabelSummary, ExportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let rating_idx = headers
        .iter()
        .position(|h| h == "Rating")
        .ok_or(ExportError::MissingColumn { name: "Rating" })?;
    let label_idx = headers.iter().position(|h| h == "label");

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    let mut header_out: Vec<&str> = headers.iter().collect();
    if label_idx.is_none() {
        header_out.push("label");
    }
    writer.write_record(&header_out)?;

    let mut summary = LabelSummary {
        rows: 0,
        positive: 0,
        non_numeric: 0,
    };

    for record in reader.records() {
        let record = record?;
        let rating = record.get(rating_idx).unwrap_or("");
        let label = match rating.parse::<f64>() {
            Ok(value) if value > LABEL_THRESHOLD => 1u8,
            Ok(_) => 0,
            Err(_) => {
                summary.non_numeric += 1;
                0
            }
        };
        if label == 1 {
            summary.positive += 1;
        }
        summary.rows += 1;

        let label = label.to_string();
        let mut row: Vec<&str> = record.iter().collect();
        match label_idx {
            Some(idx) => row[idx] = &label,
            None => row.push(&label),
        }
        writer.write_record(&row)?;
    }

    let buffer = writer.into_inner().map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e.into_error(),
    })?;
    std::fs::write(path, buffer).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    if summary.non_numeric > 0 {
        tracing::debug!(
            non_numeric = summary.non_numeric,
            "rows with non-numeric ratings labeled 0"
        );
    }
    tracing::info!(
        path = %path.display(),
        rows = summary.rows,
        positive = summary.positive,
        "labeled review table"
    );
    Ok(summary)
}
