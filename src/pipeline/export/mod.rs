//! Spreadsheet export: one xlsx variant and two CSV variants sharing a
//! common sanitization pass and cast-row construction.

mod csv;
mod xlsx;

use super::cast::CastEntry;
use super::session::Session;
use super::Result;
use tracing::warn;

pub use self::csv::{semicolon_csv, simple_csv};
pub use self::xlsx::build_workbook;

/// Export serialization variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Spreadsheet-native xlsx, falls back to [`ExportFormat::Csv`] on
    /// construction failure
    Xlsx,
    /// Semicolon-delimited, fully quoted, Excel-friendly CSV
    Csv,
    /// Plain comma-delimited CSV
    CsvSimple,
}

/// One rendered export: bytes, suggested file name, and the non-fatal
/// fallback warning when the xlsx build failed
pub struct Export {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub warning: Option<String>,
}

/// Render the session's record and cast table in the requested format
pub fn export(session: &Session, format: ExportFormat) -> Result<Export> {
    match format {
        ExportFormat::Xlsx => match build_workbook(&session.record, &session.cast) {
            Ok(bytes) => Ok(Export {
                bytes,
                file_name: format!("film_{}.xlsx", session.film_id),
                warning: None,
            }),
            Err(e) => {
                warn!("xlsx construction failed, falling back to CSV: {e}");
                let bytes = semicolon_csv(&session.record, &session.cast)?;
                Ok(Export {
                    bytes,
                    file_name: format!("film_{}.csv", session.film_id),
                    warning: Some(format!("xlsx construction failed, exported CSV instead: {e}")),
                })
            }
        },
        ExportFormat::Csv => Ok(Export {
            bytes: semicolon_csv(&session.record, &session.cast)?,
            file_name: format!("film_{}.csv", session.film_id),
            warning: None,
        }),
        ExportFormat::CsvSimple => Ok(Export {
            bytes: simple_csv(&session.record, &session.cast)?,
            file_name: format!("film_{}.csv", session.film_id),
            warning: None,
        }),
    }
}

/// Common sanitization pass: strip null bytes and BOM characters.
/// Idempotent; every variant applies it to every cell.
pub fn sanitize_cell(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '\u{0000}' && *c != '\u{feff}')
        .collect()
}

/// Collapse embedded newlines to spaces (Variant B only, on top of the
/// common pass)
pub fn collapse_newlines(value: &str) -> String {
    value.replace(['\n', '\r'], " ")
}

/// Shared cast-row construction: every entry renders as (name, id or
/// empty string), names trimmed, both columns sanitized
pub fn cast_rows(cast: &[CastEntry]) -> Vec<(String, String)> {
    cast.iter()
        .map(|entry| {
            (
                sanitize_cell(entry.name.trim()),
                sanitize_cell(entry.external_id.as_deref().unwrap_or_default()),
            )
        })
        .collect()
}
