// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Day;

/// Errors that can occur while interpreting a single schedule value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The day value does not name a day of the week.
    UnrecognizedDay(String),
    /// The day is valid but not part of the accepted day set.
    DayNotAccepted(Day),
    /// The time slot is empty after trimming.
    EmptyTimeSlot,
    /// The faculty name is empty after trimming.
    EmptyFacultyName,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedDay(value) => write!(f, "Unrecognized day '{value}'"),
            Self::DayNotAccepted(day) => {
                write!(f, "Day '{day}' is not in the accepted set of days")
            }
            Self::EmptyTimeSlot => write!(f, "Time slot cannot be empty"),
            Self::EmptyFacultyName => write!(f, "Faculty name cannot be empty"),
        }
    }
}

impl std::error::Error for DomainError {}
