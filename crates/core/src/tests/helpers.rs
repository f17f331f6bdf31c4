// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_xlsxwriter::{Workbook, Worksheet};
use timetable_domain::{Cell, Day, FacultyName, RawRow, ScheduleEntry, TimeSlot};

pub const HEADER: &[&str] = &["Faculty", "Day", "Time Slot", "Subject", "Room", "Batch"];

/// Builds an xlsx workbook with a single sheet named `Schedule`.
///
/// Empty strings leave the cell unwritten.
pub fn create_workbook(rows: &[&[&str]]) -> Vec<u8> {
    create_workbook_with_sheets(&[("Schedule", rows)])
}

pub fn create_workbook_with_sheets(sheets: &[(&str, &[&[&str]])]) -> Vec<u8> {
    let mut workbook: Workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet: &mut Worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (row, values) in (0u32..).zip(rows.iter()) {
            for (column, value) in (0u16..).zip(values.iter()) {
                if !value.is_empty() {
                    worksheet.write_string(row, column, *value).unwrap();
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

pub fn create_raw_row(row_number: usize, values: &[&str]) -> RawRow {
    RawRow::new(
        row_number,
        values
            .iter()
            .map(|value| Cell::Text((*value).to_string()))
            .collect(),
    )
}

pub fn create_test_entry(
    source_row: usize,
    faculty: &str,
    day: Day,
    slot: &str,
    subject: &str,
    room: Option<&str>,
) -> ScheduleEntry {
    ScheduleEntry {
        faculty: FacultyName::parse(faculty).unwrap(),
        day,
        time_slot: TimeSlot::parse(slot).unwrap(),
        subject: subject.to_string(),
        room: room.map(String::from),
        batch: None,
        level: None,
        source_row,
    }
}

pub fn cell_texts(row: &RawRow) -> Vec<String> {
    row.cells.iter().map(Cell::to_text).collect()
}
