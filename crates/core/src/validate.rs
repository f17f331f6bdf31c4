// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conflict detection.
//!
//! Conflicts are advisory: they never remove an entry from the valid set.

use std::collections::HashMap;
use timetable_domain::{Conflict, ConflictKey, RowError, ScheduleEntry, ValidationReport};
use tracing::warn;

/// Builds the validation report for one run.
///
/// # Arguments
///
/// * `entries` - Normalized entries in source order
/// * `errors` - Rows rejected during normalization
#[must_use]
pub fn validate(entries: Vec<ScheduleEntry>, errors: Vec<RowError>) -> ValidationReport {
    let conflicts: Vec<Conflict> = find_conflicts(&entries);

    for conflict in &conflicts {
        warn!(
            kind = %conflict.kind,
            first_row = conflict.first.source_row,
            second_row = conflict.second.source_row,
            "{conflict}"
        );
    }

    ValidationReport {
        valid_entries: entries,
        errors,
        conflicts,
    }
}

/// Finds every pair of entries sharing a faculty or room booking.
///
/// A group of `n` entries on one key yields every one of its `n * (n - 1) / 2`
/// pairs. The result is ordered by the first entry's source row, then the
/// second's, with faculty conflicts before room conflicts for the same pair.
#[must_use]
pub fn find_conflicts(entries: &[ScheduleEntry]) -> Vec<Conflict> {
    let mut bookings: HashMap<ConflictKey, Vec<&ScheduleEntry>> = HashMap::new();

    for entry in entries {
        bookings.entry(entry.faculty_key()).or_default().push(entry);
        if let Some(room_key) = entry.room_key() {
            bookings.entry(room_key).or_default().push(entry);
        }
    }

    let mut conflicts: Vec<Conflict> = Vec::new();
    for (key, mut members) in bookings {
        if members.len() < 2 {
            continue;
        }
        members.sort_by_key(|entry| entry.source_row);

        for (pos, first) in members.iter().enumerate() {
            for second in &members[pos + 1..] {
                conflicts.push(Conflict::new(
                    key.kind(),
                    (*first).clone(),
                    (*second).clone(),
                ));
            }
        }
    }

    conflicts.sort_by_key(|c| (c.first.source_row, c.second.source_row, c.kind));
    conflicts
}
