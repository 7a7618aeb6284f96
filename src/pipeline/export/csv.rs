//! CSV variants: both are UTF-8 with a BOM prefix so spreadsheet tools
//! auto-detect the encoding, and both carry the record and cast tables as
//! two labeled sections in one text stream.

use super::{cast_rows, collapse_newlines, sanitize_cell};
use crate::pipeline::cast::CastEntry;
use crate::pipeline::record::FilmRecord;
use crate::pipeline::{PipelineError, Result};
use csv::{QuoteStyle, WriterBuilder};

const BOM: &[u8] = "\u{feff}".as_bytes();
const MAIN_SECTION: &str = "=== ОСНОВНАЯ ИНФОРМАЦИЯ ===";
const CAST_SECTION: &str = "=== АКТЕРЫ И СЪЕМОЧНАЯ ГРУППА ===";

/// Excel-friendly variant: semicolon delimiter, every field quoted,
/// embedded newlines collapsed to spaces.
pub fn semicolon_csv(record: &FilmRecord, cast: &[CastEntry]) -> Result<Vec<u8>> {
    build(record, cast, b';', QuoteStyle::Always, true)
}

/// Plain variant: comma delimiter, quoting only where required, values
/// untouched beyond the common sanitization pass.
pub fn simple_csv(record: &FilmRecord, cast: &[CastEntry]) -> Result<Vec<u8>> {
    build(record, cast, b',', QuoteStyle::Necessary, false)
}

fn build(
    record: &FilmRecord,
    cast: &[CastEntry],
    delimiter: u8,
    quote_style: QuoteStyle,
    collapse: bool,
) -> Result<Vec<u8>> {
    let clean = |value: &str| {
        let cell = sanitize_cell(value);
        if collapse { collapse_newlines(&cell) } else { cell }
    };

    let mut out = Vec::new();
    out.extend_from_slice(BOM);

    out.extend_from_slice(MAIN_SECTION.as_bytes());
    out.push(b'\n');

    let headers: Vec<String> = record.rows().iter().map(|(k, _)| clean(k)).collect();
    let values: Vec<String> = record.rows().iter().map(|(_, v)| clean(v)).collect();
    write_table(&mut out, delimiter, quote_style, &[headers, values])?;

    out.push(b'\n');
    out.extend_from_slice(CAST_SECTION.as_bytes());
    out.push(b'\n');

    let mut cast_table = vec![vec!["Имя".to_string(), "ID".to_string()]];
    for (name, id) in cast_rows(cast) {
        cast_table.push(vec![clean(&name), clean(&id)]);
    }
    write_table(&mut out, delimiter, quote_style, &cast_table)?;

    Ok(out)
}

fn write_table(
    out: &mut Vec<u8>,
    delimiter: u8,
    quote_style: QuoteStyle,
    rows: &[Vec<String>],
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(quote_style)
        .from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| PipelineError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PipelineError::Export(e.to_string()))?;
    out.extend_from_slice(&bytes);

    Ok(())
}
