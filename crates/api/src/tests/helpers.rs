// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use rust_xlsxwriter::Workbook;
use time::OffsetDateTime;
use time::macros::datetime;
use timetable::TransformConfig;

use crate::TransformRequest;

pub const HEADER: &[&str] = &["Faculty", "Day", "Time Slot", "Subject", "Room"];

pub fn create_test_time() -> OffsetDateTime {
    datetime!(2026-10-18 09:30:15 UTC)
}

pub fn create_test_workbook(rows: &[&[&str]]) -> Vec<u8> {
    let mut workbook: Workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (row, values) in (0u32..).zip(rows.iter()) {
        for (column, value) in (0u16..).zip(values.iter()) {
            if !value.is_empty() {
                worksheet.write_string(row, column, *value).unwrap();
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

pub fn create_test_request(rows: &[&[&str]]) -> TransformRequest {
    TransformRequest {
        original_name: String::from("master_schedule.xlsx"),
        bytes: create_test_workbook(rows),
        config: TransformConfig::default(),
    }
}
