// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod entry;
mod error;
mod time_slot;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use entry::{
    AcademicLevel, Conflict, ConflictKey, ConflictKind, DEFAULT_SESSION_MINUTES, FacultyTimetable,
    RowError, ScheduleEntry, ValidationReport,
};
pub use error::DomainError;
pub use time_slot::TimeSlot;
pub use types::{Cell, Day, FacultyName, RawRow, collapse_whitespace};
