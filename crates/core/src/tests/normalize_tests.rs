// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timetable_domain::{Day, RawRow, RowError, ScheduleEntry};

use super::helpers::{HEADER, create_raw_row};
use crate::SchemaError;
use crate::normalize::{Field, HeaderMap, NormalizedRows, normalize, normalize_header, normalize_rows};

const WEEKDAYS: [Day; 5] = [
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
];

#[test]
fn test_normalize_header() {
    assert_eq!(normalize_header("Time Slot"), "time slot");
    assert_eq!(normalize_header("  TIME   SLOT "), "time slot");
    assert_eq!(normalize_header("time_slot"), "time slot");
    assert_eq!(normalize_header("Time-Slot"), "time slot");
    assert_eq!(normalize_header("Faculty"), "faculty");
}

#[test]
fn test_header_map_tolerates_column_order_and_extras() {
    let header: RawRow = create_raw_row(
        1,
        &["Notes", "subject", "TIME SLOT", "Day", "Faculty Name", "Room"],
    );

    let map: HeaderMap = HeaderMap::from_header(&header).unwrap();

    assert_eq!(map.column(Field::Subject), Some(1));
    assert_eq!(map.column(Field::TimeSlot), Some(2));
    assert_eq!(map.column(Field::Day), Some(3));
    assert_eq!(map.column(Field::Faculty), Some(4));
    assert_eq!(map.column(Field::Room), Some(5));
    assert_eq!(map.column(Field::Batch), None);
}

#[test]
fn test_header_map_uses_leftmost_duplicate() {
    let header: RawRow = create_raw_row(1, &["Faculty", "Day", "Time Slot", "Subject", "Day"]);

    let map: HeaderMap = HeaderMap::from_header(&header).unwrap();

    assert_eq!(map.column(Field::Day), Some(1));
}

#[test]
fn test_header_map_lists_every_missing_column() {
    let header: RawRow = create_raw_row(1, &["Faculty", "Subject", "Room"]);

    let result: Result<HeaderMap, SchemaError> = HeaderMap::from_header(&header);

    let err: SchemaError = result.unwrap_err();
    assert_eq!(
        err,
        SchemaError::MissingHeaders {
            missing: vec!["day", "time slot"]
        }
    );
    assert_eq!(err.to_string(), "Missing required headers: day, time slot");
}

#[test]
fn test_normalize_rows_without_header() {
    let result: Result<NormalizedRows, SchemaError> = normalize_rows(&[], &Day::ALL);
    assert_eq!(result, Err(SchemaError::NoHeaderRow));
}

#[test]
fn test_normalize_trims_and_canonicalizes() {
    let header: HeaderMap = HeaderMap::from_header(&create_raw_row(1, HEADER)).unwrap();
    let row: RawRow = create_raw_row(
        4,
        &["  Dr.   Rao ", "mon", "9:00 - 10:00", " Maths ", "", " CSE  A "],
    );

    let entry: ScheduleEntry = normalize(&row, &header, &Day::ALL).unwrap();

    assert_eq!(entry.faculty.display(), "Dr. Rao");
    assert_eq!(entry.day, Day::Monday);
    assert_eq!(entry.time_slot.label(), "09:00-10:00");
    assert_eq!(entry.subject, "Maths");
    assert_eq!(entry.room, None);
    assert_eq!(entry.batch.as_deref(), Some("CSE A"));
    assert_eq!(entry.source_row, 4);
}

#[test]
fn test_normalize_short_row_treats_missing_optional_cells_as_absent() {
    let header: HeaderMap = HeaderMap::from_header(&create_raw_row(1, HEADER)).unwrap();
    let row: RawRow = create_raw_row(2, &["Dr. Rao", "Tuesday", "10-11", "Physics"]);

    let entry: ScheduleEntry = normalize(&row, &header, &Day::ALL).unwrap();

    assert_eq!(entry.room, None);
    assert_eq!(entry.batch, None);
}

#[test]
fn test_missing_required_field_is_a_row_error() {
    let header: HeaderMap = HeaderMap::from_header(&create_raw_row(1, HEADER)).unwrap();
    let row: RawRow = create_raw_row(7, &["", "Monday", "9-10", "   ", "101"]);

    let err: RowError = normalize(&row, &header, &Day::ALL).unwrap_err();

    assert_eq!(err.source_row, 7);
    assert_eq!(err.reason, "missing required field(s): faculty, subject");
    assert_eq!(
        err.to_string(),
        "Row 7: missing required field(s): faculty, subject"
    );
}

#[test]
fn test_unrecognized_day_is_a_row_error() {
    let header: HeaderMap = HeaderMap::from_header(&create_raw_row(1, HEADER)).unwrap();
    let row: RawRow = create_raw_row(3, &["Dr. Rao", "Funday", "9-10", "Maths"]);

    let err: RowError = normalize(&row, &header, &Day::ALL).unwrap_err();

    assert_eq!(err.reason, "day: Unrecognized day 'Funday'");
}

#[test]
fn test_day_outside_accepted_set_is_a_row_error() {
    let header: HeaderMap = HeaderMap::from_header(&create_raw_row(1, HEADER)).unwrap();
    let row: RawRow = create_raw_row(3, &["Dr. Rao", "Sat", "9-10", "Maths"]);

    let err: RowError = normalize(&row, &header, &WEEKDAYS).unwrap_err();
    assert_eq!(
        err.reason,
        "day: Day 'Saturday' is not in the accepted set of days"
    );

    assert!(normalize(&row, &header, &Day::ALL).is_ok());
}

#[test]
fn test_all_problems_are_reported_together() {
    let header: HeaderMap = HeaderMap::from_header(&create_raw_row(1, HEADER)).unwrap();
    let row: RawRow = create_raw_row(9, &["Dr. Rao", "Someday", "9-10", ""]);

    let err: RowError = normalize(&row, &header, &Day::ALL).unwrap_err();

    assert_eq!(
        err.reason,
        "missing required field(s): subject; day: Unrecognized day 'Someday'"
    );
}

#[test]
fn test_normalize_rows_splits_entries_and_errors_in_source_order() {
    let rows: Vec<RawRow> = vec![
        create_raw_row(1, HEADER),
        create_raw_row(2, &["Dr. Rao", "Mon", "9-10", "Maths"]),
        create_raw_row(3, &["", "Mon", "10-11", "Physics"]),
        create_raw_row(5, &["Dr. Iyer", "Tue", "9-10", "Chemistry"]),
        create_raw_row(6, &["Dr. Iyer", "Blursday", "9-10", "Biology"]),
    ];

    let normalized: NormalizedRows = normalize_rows(&rows, &Day::ALL).unwrap();

    let entry_rows: Vec<usize> = normalized.entries.iter().map(|e| e.source_row).collect();
    let error_rows: Vec<usize> = normalized.errors.iter().map(|e| e.source_row).collect();
    assert_eq!(entry_rows, vec![2, 5]);
    assert_eq!(error_rows, vec![3, 6]);
}

#[test]
fn test_level_column_is_optional_and_aliased() {
    let header: HeaderMap = HeaderMap::from_header(&create_raw_row(
        1,
        &["Faculty", "Day", "Time Slot", "Subject", "UG/PG"],
    ))
    .unwrap();
    assert_eq!(header.column(Field::Level), Some(4));

    let row: RawRow = create_raw_row(2, &["Dr. Rao", "Mon", "9-10", "Maths", " pg "]);
    let entry: ScheduleEntry = normalize(&row, &header, &Day::ALL).unwrap();
    assert_eq!(entry.level.as_deref(), Some("pg"));

    let header: HeaderMap = HeaderMap::from_header(&create_raw_row(1, HEADER)).unwrap();
    assert_eq!(header.column(Field::Level), None);
    let row: RawRow = create_raw_row(2, &["Dr. Rao", "Mon", "9-10", "Maths"]);
    assert_eq!(normalize(&row, &header, &Day::ALL).unwrap().level, None);
}
