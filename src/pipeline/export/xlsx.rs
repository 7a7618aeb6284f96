//! Spreadsheet-native export via rust_xlsxwriter: the record as a
//! single-row sheet plus the cast as a two-column sheet, with the per-cell
//! length limits the xlsx format enforces.

use super::{cast_rows, sanitize_cell};
use crate::pipeline::cast::CastEntry;
use crate::pipeline::record::FilmRecord;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};

const MAIN_SHEET: &str = "Основная информация";
const CAST_SHEET: &str = "Актеры и съемочная группа";

// xlsx caps a cell at 32767 characters; truncate below that with a marker
const MAX_CELL_CHARS: usize = 32_000;
const MAX_NAME_CHARS: usize = 255;

fn truncate_cell(value: &str) -> String {
    let cell = sanitize_cell(value);
    if cell.chars().count() > MAX_CELL_CHARS {
        let mut cut: String = cell.chars().take(MAX_CELL_CHARS).collect();
        cut.push_str("...");
        cut
    } else {
        cell
    }
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > MAX_NAME_CHARS {
        name.chars().take(MAX_NAME_CHARS).collect()
    } else {
        name.to_string()
    }
}

/// Build the workbook in memory. Any construction failure is reported to
/// the caller, which falls back to the semicolon CSV variant.
pub fn build_workbook(record: &FilmRecord, cast: &[CastEntry]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD3D3D3))
        .set_border(FormatBorder::Thin);

    let main = workbook.add_worksheet();
    main.set_name(MAIN_SHEET)?;
    for (col, (key, value)) in record.rows().iter().enumerate() {
        let col = col as u16;
        main.write_string_with_format(0, col, *key, &header_format)?;
        main.write_string(1, col, truncate_cell(value))?;
    }
    // Label column narrower than the value columns
    main.set_column_width(0, 25)?;
    for col in 1..record.rows().len() as u16 {
        main.set_column_width(col, 50)?;
    }

    let cast_sheet = workbook.add_worksheet();
    cast_sheet.set_name(CAST_SHEET)?;
    cast_sheet.write_string_with_format(0, 0, "Имя", &header_format)?;
    cast_sheet.write_string_with_format(0, 1, "ID", &header_format)?;
    for (row, (name, id)) in cast_rows(cast).iter().enumerate() {
        let row = row as u32 + 1;
        cast_sheet.write_string(row, 0, truncate_name(name))?;
        cast_sheet.write_string(row, 1, id.as_str())?;
    }
    cast_sheet.set_column_width(0, 40)?;
    cast_sheet.set_column_width(1, 15)?;

    workbook.save_to_buffer()
}
