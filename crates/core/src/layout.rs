// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Faculty grouping and canonical ordering.

use std::cmp::Ordering;
use std::collections::HashMap;
use timetable_domain::{FacultyTimetable, ScheduleEntry};

/// Partitions entries into one timetable per faculty member.
///
/// Faculties appear in order of first appearance in `entries`. Each
/// timetable is ordered by day (Monday first), then time slot, then source
/// row. Deterministic for a given input order.
#[must_use]
pub fn layout(entries: &[ScheduleEntry]) -> Vec<FacultyTimetable> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut timetables: Vec<FacultyTimetable> = Vec::new();

    for entry in entries {
        let position: usize = *positions.entry(entry.faculty.key()).or_insert_with(|| {
            timetables.push(FacultyTimetable::new(entry.faculty.clone()));
            timetables.len() - 1
        });
        timetables[position].entries.push(entry.clone());
    }

    for timetable in &mut timetables {
        timetable.entries.sort_by(canonical_order);
    }

    timetables
}

/// Day, then time slot, then source row.
#[must_use]
pub fn canonical_order(a: &ScheduleEntry, b: &ScheduleEntry) -> Ordering {
    a.day
        .cmp(&b.day)
        .then_with(|| a.time_slot.cmp(&b.time_slot))
        .then_with(|| a.source_row.cmp(&b.source_row))
}
