// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grid parsing: spreadsheet bytes to raw rows.
//!
//! No cell is interpreted here. Fully blank rows are dropped and trailing
//! blank cells are trimmed, but every surviving row keeps its 1-based row
//! number from the source sheet for diagnostics.

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto_from_rs};
use csv::StringRecord;
use std::io::Cursor;
use timetable_domain::{Cell, RawRow};
use tracing::debug;

use crate::config::InputFormat;
use crate::error::ParseError;

/// Local file header of a zip container (xlsx, xlsm, xlsb, ods).
const ZIP_SIGNATURE: &[u8] = b"PK\x03\x04";

/// Compound file header of a legacy OLE container (xls).
const OLE_SIGNATURE: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Returns whether the bytes start with a workbook container signature.
#[must_use]
pub fn has_workbook_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_SIGNATURE) || bytes.starts_with(OLE_SIGNATURE)
}

/// Parses spreadsheet bytes into raw rows.
///
/// # Arguments
///
/// * `bytes` - The raw input
/// * `format` - How to read the input
/// * `sheet` - The sheet to read; `None` selects the first sheet
///
/// # Errors
///
/// Returns a `ParseError` if the input is empty, has no recognizable
/// container signature, cannot be opened, has no sheets, or lacks the
/// requested sheet.
pub fn parse(
    bytes: &[u8],
    format: InputFormat,
    sheet: Option<&str>,
) -> Result<Vec<RawRow>, ParseError> {
    if bytes.is_empty() {
        return Err(ParseError::Empty);
    }

    let rows: Vec<RawRow> = match format {
        InputFormat::Csv => parse_csv(bytes)?,
        InputFormat::Workbook => parse_workbook(bytes, sheet)?,
        InputFormat::Auto => {
            if !has_workbook_signature(bytes) {
                return Err(ParseError::UnrecognizedSignature);
            }
            parse_workbook(bytes, sheet)?
        }
    };

    debug!(rows = rows.len(), ?format, "Parsed input grid");
    Ok(rows)
}

/// Lists the sheet names of a workbook in workbook order.
///
/// # Errors
///
/// Returns `ParseError::Corrupt` if the container cannot be opened.
pub fn sheet_names(bytes: &[u8]) -> Result<Vec<String>, ParseError> {
    let workbook: Sheets<Cursor<&[u8]>> = open_workbook(bytes)?;
    Ok(workbook.sheet_names())
}

fn open_workbook(bytes: &[u8]) -> Result<Sheets<Cursor<&[u8]>>, ParseError> {
    open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| ParseError::Corrupt {
        reason: e.to_string(),
    })
}

fn parse_workbook(bytes: &[u8], sheet: Option<&str>) -> Result<Vec<RawRow>, ParseError> {
    let mut workbook: Sheets<Cursor<&[u8]>> = open_workbook(bytes)?;
    let names: Vec<String> = workbook.sheet_names();

    let name: String = match sheet {
        Some(requested) => names
            .iter()
            .find(|n| n.as_str() == requested)
            .cloned()
            .ok_or_else(|| ParseError::SheetNotFound {
                name: requested.to_string(),
            })?,
        None => names.first().cloned().ok_or(ParseError::NoSheets)?,
    };

    let range: Range<Data> = workbook
        .worksheet_range(&name)
        .map_err(|e| ParseError::Corrupt {
            reason: format!("sheet '{name}': {e}"),
        })?;

    debug!(sheet = %name, "Reading worksheet");
    Ok(rows_from_range(&range))
}

fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    // Ranges start at the first used cell, not necessarily A1.
    let (first_row, first_column): (usize, usize) = range
        .start()
        .map_or((0, 0), |(row, column)| (row as usize, column as usize));

    range
        .rows()
        .enumerate()
        .filter_map(|(offset, cells)| {
            let mut row: Vec<Cell> = vec![Cell::Empty; first_column];
            row.extend(cells.iter().map(cell_from_data));
            finish_row(first_row + offset + 1, row)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
            Cell::Text(text.clone())
        }
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Float(value) => Cell::Number(*value),
        Data::Bool(value) => Cell::Bool(*value),
        Data::DateTime(value) => Cell::DateTime(value.as_f64()),
        Data::Empty | Data::Error(_) => Cell::Empty,
    }
}

fn parse_csv(bytes: &[u8]) -> Result<Vec<RawRow>, ParseError> {
    let content: &[u8] = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content);

    let mut rows: Vec<RawRow> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record: StringRecord = result.map_err(|e| ParseError::Csv {
            reason: e.to_string(),
        })?;
        // The reader skips empty lines, so count physical lines instead.
        let row_number: usize = record
            .position()
            .and_then(|pos| usize::try_from(pos.line()).ok())
            .unwrap_or(idx + 1);
        let cells: Vec<Cell> = record
            .iter()
            .map(|field| Cell::Text(field.to_string()))
            .collect();
        if let Some(row) = finish_row(row_number, cells) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Trims trailing blank cells; drops the row if nothing remains.
fn finish_row(row_number: usize, mut cells: Vec<Cell>) -> Option<RawRow> {
    while cells.last().is_some_and(Cell::is_blank) {
        cells.pop();
    }
    if cells.is_empty() {
        return None;
    }
    Some(RawRow::new(row_number, cells))
}
