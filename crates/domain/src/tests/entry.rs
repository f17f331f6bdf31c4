// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AcademicLevel, Conflict, ConflictKind, Day, FacultyName, FacultyTimetable, RowError,
    ScheduleEntry, TimeSlot,
};

fn create_test_entry(row: usize, day: Day, slot: &str, room: Option<&str>) -> ScheduleEntry {
    ScheduleEntry {
        faculty: FacultyName::parse("Dr. Rao").unwrap(),
        day,
        time_slot: TimeSlot::parse(slot).unwrap(),
        subject: String::from("Maths"),
        room: room.map(String::from),
        batch: None,
        level: None,
        source_row: row,
    }
}

#[test]
fn test_faculty_key_ignores_case_and_slot_spelling() {
    let a: ScheduleEntry = create_test_entry(2, Day::Monday, "9:00-10:00", None);
    let mut b: ScheduleEntry = create_test_entry(3, Day::Monday, "09:00 - 10:00", None);
    b.faculty = FacultyName::parse("DR. RAO").unwrap();
    assert_eq!(a.faculty_key(), b.faculty_key());
    assert_eq!(a.faculty_key().kind(), ConflictKind::Faculty);
}

#[test]
fn test_room_key_absent_without_room() {
    let entry: ScheduleEntry = create_test_entry(2, Day::Monday, "9-10", None);
    assert!(entry.room_key().is_none());

    let a: ScheduleEntry = create_test_entry(2, Day::Monday, "9-10", Some("Lab 1"));
    let b: ScheduleEntry = create_test_entry(3, Day::Monday, "9-10", Some("LAB 1"));
    assert_eq!(a.room_key(), b.room_key());
    assert_eq!(a.room_key().unwrap().kind(), ConflictKind::Room);
}

#[test]
fn test_conflict_orders_pair_by_source_row() {
    let later: ScheduleEntry = create_test_entry(7, Day::Monday, "9-10", None);
    let earlier: ScheduleEntry = create_test_entry(3, Day::Monday, "9-10", None);
    let conflict: Conflict = Conflict::new(ConflictKind::Faculty, later, earlier);
    assert_eq!(conflict.first.source_row, 3);
    assert_eq!(conflict.second.source_row, 7);
    assert_eq!(
        conflict.to_string(),
        "Faculty 'Dr. Rao' is double-booked on Monday 09:00-10:00 (rows 3 and 7)"
    );
}

#[test]
fn test_row_error_display() {
    let err: RowError = RowError::new(4, String::from("missing required field(s): subject"));
    assert_eq!(err.to_string(), "Row 4: missing required field(s): subject");
}

#[test]
fn test_timetable_totals() {
    let mut timetable: FacultyTimetable =
        FacultyTimetable::new(FacultyName::parse("Dr. Rao").unwrap());
    timetable
        .entries
        .push(create_test_entry(2, Day::Wednesday, "9:00-10:30", None));
    timetable
        .entries
        .push(create_test_entry(3, Day::Monday, "11:00-12:00", None));
    timetable
        .entries
        .push(create_test_entry(4, Day::Monday, "Period 5", None));

    // 90 + 60 + one hour for the untimed period
    assert_eq!(timetable.scheduled_minutes(), 210);
    assert_eq!(timetable.teaching_days(), vec![Day::Monday, Day::Wednesday]);
}

#[test]
fn test_keys_fold_untimed_slot_case() {
    let a: ScheduleEntry = create_test_entry(2, Day::Friday, "Period 1", Some("101"));
    let b: ScheduleEntry = create_test_entry(3, Day::Friday, "PERIOD 1", Some("101"));
    assert_eq!(a.faculty_key(), b.faculty_key());
    assert_eq!(a.room_key(), b.room_key());
}

#[test]
fn test_level_counts_and_profile() {
    let mut timetable: FacultyTimetable =
        FacultyTimetable::new(FacultyName::parse("Dr. Rao").unwrap());
    assert_eq!(timetable.academic_level(), None);

    for (row, level) in [(2, Some("UG")), (3, Some("ug")), (4, None)] {
        let mut entry: ScheduleEntry = create_test_entry(row, Day::Monday, "9-10", None);
        entry.level = level.map(String::from);
        timetable.entries.push(entry);
    }
    assert_eq!(timetable.sessions_at_level("UG"), 2);
    assert_eq!(timetable.sessions_at_level("PG"), 0);
    assert_eq!(timetable.academic_level(), Some(AcademicLevel::Undergraduate));

    let mut entry: ScheduleEntry = create_test_entry(5, Day::Tuesday, "9-10", None);
    entry.level = Some(String::from("UG/PG"));
    timetable.entries.push(entry);
    assert_eq!(timetable.sessions_at_level("UG"), 3);
    assert_eq!(timetable.sessions_at_level("PG"), 1);
    assert_eq!(timetable.academic_level(), Some(AcademicLevel::Mixed));
    assert_eq!(AcademicLevel::Mixed.to_string(), "Mixed");
}
