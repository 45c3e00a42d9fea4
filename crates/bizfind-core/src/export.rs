//! CSV serialization of the current result set.
//!
//! The output format is fixed byte for byte: a bare header row, CRLF row
//! separators with no trailing terminator, text cells always quoted with
//! line breaks flattened to spaces, and numeric cells bare.

use crate::business::{format_number, Business};
use crate::error::ExportError;
use crate::status::Status;
use crate::store::ResultStore;

pub const EXPORT_FILE_NAME: &str = "results.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Column order of every exported document, regardless of which fields a
/// business populates.
pub const CSV_COLUMNS: [&str; 7] = [
    "name", "address", "phone", "website", "reviews", "rating", "place_id",
];

const ROW_SEPARATOR: &str = "\r\n";

/// Destination for an exported document (a download, a directory, a buffer).
pub trait FileSink {
    /// Persists `contents` under `file_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Delivery`] when the document cannot be saved.
    fn save(&mut self, file_name: &str, mime_type: &str, contents: &[u8])
        -> Result<(), ExportError>;
}

/// Serializes `results` into a CSV document.
#[must_use]
pub fn to_csv(results: &[Business]) -> String {
    let mut rows = Vec::with_capacity(results.len() + 1);
    rows.push(CSV_COLUMNS.join(","));
    rows.extend(results.iter().map(csv_row));
    rows.join(ROW_SEPARATOR)
}

fn csv_row(business: &Business) -> String {
    [
        text_cell(business.name.as_deref()),
        text_cell(business.address.as_deref()),
        text_cell(business.phone.as_deref()),
        text_cell(business.website.as_deref()),
        number_cell(business.reviews),
        number_cell(business.rating),
        text_cell(business.place_id.as_deref()),
    ]
    .join(",")
}

fn text_cell(value: Option<&str>) -> String {
    quote(value.unwrap_or_default())
}

fn number_cell(value: Option<f64>) -> String {
    value.map_or_else(|| quote(""), format_number)
}

/// Flattens line breaks to a single space, doubles quotes, and wraps the
/// result in quotes.
fn quote(raw: &str) -> String {
    let flattened = raw.replace("\r\n", " ").replace(['\r', '\n'], " ");
    format!("\"{}\"", flattened.replace('"', "\"\""))
}

/// Serializes the store and hands the document to `sink`.
///
/// Returns the number of exported rows.
///
/// # Errors
///
/// - [`ExportError::Empty`] when the store holds no results; nothing is
///   delivered.
/// - [`ExportError::Delivery`] when the sink fails.
pub fn write_export<S: FileSink + ?Sized>(
    store: &ResultStore,
    sink: &mut S,
) -> Result<usize, ExportError> {
    if !store.is_exportable() {
        return Err(ExportError::Empty);
    }
    let document = to_csv(store.results());
    sink.save(EXPORT_FILE_NAME, EXPORT_MIME_TYPE, document.as_bytes())?;
    Ok(store.len())
}

/// Exports the store and reports the outcome as a user-visible status.
pub fn export_results<S: FileSink + ?Sized>(store: &ResultStore, sink: &mut S) -> Status {
    match write_export(store, sink) {
        Ok(rows) => {
            tracing::info!(rows, file = EXPORT_FILE_NAME, "exported results");
            Status::success(format!(
                "Exported {rows} {} to {EXPORT_FILE_NAME}",
                if rows == 1 { "business" } else { "businesses" }
            ))
        }
        Err(ExportError::Empty) => {
            tracing::warn!("export refused: no results");
            Status::warning(ExportError::Empty.to_string())
        }
        Err(err) => {
            tracing::error!(error = %err, "export failed");
            Status::error(format!("Export failed: {err}"))
        }
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
