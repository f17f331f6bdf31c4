// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::time_slot::TimeSlot;
use crate::types::{Day, FacultyName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One normalized class from the master schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The faculty member teaching the class.
    pub faculty: FacultyName,
    /// The day of the week.
    pub day: Day,
    /// The canonical time slot.
    pub time_slot: TimeSlot,
    /// The subject taught. Never empty.
    pub subject: String,
    /// The room, if one was given.
    pub room: Option<String>,
    /// The student batch, if one was given.
    pub batch: Option<String>,
    /// The academic level (`UG`, `PG`, ...), if one was given.
    pub level: Option<String>,
    /// The 1-based row number this entry was read from.
    pub source_row: usize,
}

impl ScheduleEntry {
    /// Returns the key identifying this entry's faculty booking.
    #[must_use]
    pub fn faculty_key(&self) -> ConflictKey {
        ConflictKey::Faculty {
            day: self.day,
            time_slot: self.time_slot.key().to_string(),
            faculty: self.faculty.key().to_string(),
        }
    }

    /// Returns the key identifying this entry's room booking.
    ///
    /// Entries without a room never occupy one.
    #[must_use]
    pub fn room_key(&self) -> Option<ConflictKey> {
        self.room.as_ref().map(|room| ConflictKey::Room {
            day: self.day,
            time_slot: self.time_slot.key().to_string(),
            room: room.to_lowercase(),
        })
    }
}

/// The axis on which two entries collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    /// The same faculty member is booked twice in one slot.
    Faculty,
    /// The same room is booked twice in one slot.
    Room,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Faculty => write!(f, "faculty"),
            Self::Room => write!(f, "room"),
        }
    }
}

/// A booking key: two entries sharing one are double-booked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConflictKey {
    /// (day, time slot, faculty) booking.
    Faculty {
        day: Day,
        time_slot: String,
        faculty: String,
    },
    /// (day, time slot, room) booking.
    Room {
        day: Day,
        time_slot: String,
        room: String,
    },
}

impl ConflictKey {
    /// Returns the axis this key books.
    #[must_use]
    pub const fn kind(&self) -> ConflictKind {
        match self {
            Self::Faculty { .. } => ConflictKind::Faculty,
            Self::Room { .. } => ConflictKind::Room,
        }
    }
}

/// A pair of entries that claim the same faculty member or room at once.
///
/// `first` always comes from the earlier source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// The axis of the collision.
    pub kind: ConflictKind,
    /// The entry from the earlier row.
    pub first: ScheduleEntry,
    /// The entry from the later row.
    pub second: ScheduleEntry,
}

impl Conflict {
    /// Creates a conflict, ordering the pair by source row.
    #[must_use]
    pub fn new(kind: ConflictKind, a: ScheduleEntry, b: ScheduleEntry) -> Self {
        if a.source_row <= b.source_row {
            Self {
                kind,
                first: a,
                second: b,
            }
        } else {
            Self {
                kind,
                first: b,
                second: a,
            }
        }
    }
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let subject: String = match self.kind {
            ConflictKind::Faculty => format!("Faculty '{}'", self.first.faculty),
            ConflictKind::Room => format!(
                "Room '{}'",
                self.first.room.as_deref().unwrap_or_default()
            ),
        };
        write!(
            f,
            "{subject} is double-booked on {} {} (rows {} and {})",
            self.first.day, self.first.time_slot, self.first.source_row, self.second.source_row
        )
    }
}

/// A row that could not be turned into a schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// The 1-based row number.
    pub source_row: usize,
    /// Why the row was rejected.
    pub reason: String,
}

impl RowError {
    /// Creates a new `RowError`.
    #[must_use]
    pub const fn new(source_row: usize, reason: String) -> Self {
        Self { source_row, reason }
    }
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row {}: {}", self.source_row, self.reason)
    }
}

/// The outcome of normalizing and validating one master schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Entries that passed normalization, in source order. Conflicting
    /// entries stay here.
    pub valid_entries: Vec<ScheduleEntry>,
    /// Rows rejected during normalization.
    pub errors: Vec<RowError>,
    /// Every conflicting pair, ordered by source row.
    pub conflicts: Vec<Conflict>,
}

impl ValidationReport {
    /// Returns whether any double-booking was found.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Returns the conflicts of one kind.
    pub fn conflicts_of(&self, kind: ConflictKind) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter().filter(move |c| c.kind == kind)
    }
}

/// Minutes credited to a session whose slot has no clock range.
pub const DEFAULT_SESSION_MINUTES: u32 = 60;

/// Which programmes a faculty member teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicLevel {
    Undergraduate,
    Postgraduate,
    Mixed,
}

impl AcademicLevel {
    /// Returns the short label used in reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Undergraduate => "UG",
            Self::Postgraduate => "PG",
            Self::Mixed => "Mixed",
        }
    }
}

impl std::fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One faculty member's classes in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyTimetable {
    /// The faculty member, spelled as first seen in the input.
    pub faculty: FacultyName,
    /// Entries ordered by day, then time slot, then source row.
    pub entries: Vec<ScheduleEntry>,
}

impl FacultyTimetable {
    /// Creates an empty timetable for a faculty member.
    #[must_use]
    pub const fn new(faculty: FacultyName) -> Self {
        Self {
            faculty,
            entries: Vec::new(),
        }
    }

    /// Total teaching minutes. A slot without a forward clock range counts
    /// as one hour.
    #[must_use]
    pub fn scheduled_minutes(&self) -> u32 {
        self.entries
            .iter()
            .map(|entry| {
                entry
                    .time_slot
                    .duration_minutes()
                    .unwrap_or(DEFAULT_SESSION_MINUTES)
            })
            .sum()
    }

    /// Number of entries whose level mentions `marker` (case-insensitive).
    ///
    /// A level of `UG/PG` counts towards both `UG` and `PG`.
    #[must_use]
    pub fn sessions_at_level(&self, marker: &str) -> usize {
        let marker: String = marker.to_uppercase();
        self.entries
            .iter()
            .filter(|entry| {
                entry
                    .level
                    .as_ref()
                    .is_some_and(|level| level.to_uppercase().contains(&marker))
            })
            .count()
    }

    /// The academic level profile, if any entry carries a level.
    #[must_use]
    pub fn academic_level(&self) -> Option<AcademicLevel> {
        match (
            self.sessions_at_level(AcademicLevel::Undergraduate.as_str()) > 0,
            self.sessions_at_level(AcademicLevel::Postgraduate.as_str()) > 0,
        ) {
            (true, true) => Some(AcademicLevel::Mixed),
            (true, false) => Some(AcademicLevel::Undergraduate),
            (false, true) => Some(AcademicLevel::Postgraduate),
            (false, false) => None,
        }
    }

    /// The distinct days this faculty member teaches, Monday first.
    #[must_use]
    pub fn teaching_days(&self) -> Vec<Day> {
        self.entries
            .iter()
            .map(|entry| entry.day)
            .collect::<BTreeSet<Day>>()
            .into_iter()
            .collect()
    }
}
