// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entry normalization: raw rows to schedule entries.
//!
//! The first row is the header. Columns are located by name, once per run,
//! so the master schedule may order its columns freely and carry extra
//! columns that are ignored.

use std::collections::HashMap;
use timetable_domain::{
    Day, DomainError, FacultyName, RawRow, RowError, ScheduleEntry, TimeSlot, collapse_whitespace,
};
use tracing::debug;

use crate::error::SchemaError;

/// A schedule field that can be mapped to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Faculty,
    Day,
    TimeSlot,
    Subject,
    Room,
    Batch,
    Level,
}

impl Field {
    /// Fields every master schedule must provide.
    pub const REQUIRED: [Self; 4] = [Self::Faculty, Self::Day, Self::TimeSlot, Self::Subject];

    /// Returns the canonical column name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Faculty => "faculty",
            Self::Day => "day",
            Self::TimeSlot => "time slot",
            Self::Subject => "subject",
            Self::Room => "room",
            Self::Batch => "batch",
            Self::Level => "level",
        }
    }

    /// Resolves a normalized header name, including accepted aliases.
    #[must_use]
    pub fn from_header(normalized: &str) -> Option<Self> {
        match normalized {
            "faculty" | "faculty name" | "teacher" | "instructor" | "professor" => {
                Some(Self::Faculty)
            }
            "day" | "weekday" => Some(Self::Day),
            "time slot" | "timeslot" | "time" | "slot" | "period" => Some(Self::TimeSlot),
            "subject" | "course" => Some(Self::Subject),
            "room" | "venue" | "classroom" => Some(Self::Room),
            "batch" | "section" | "group" => Some(Self::Batch),
            "level" | "ug/pg" | "program" | "programme" | "degree" | "academic level" => {
                Some(Self::Level)
            }
            _ => None,
        }
    }
}

/// Normalizes a header for case-insensitive, whitespace-tolerant matching.
///
/// Underscores and hyphens count as spaces, so `Time_Slot`, `time-slot`
/// and ` TIME   SLOT ` all become `time slot`.
#[must_use]
pub fn normalize_header(header: &str) -> String {
    collapse_whitespace(&header.replace(['_', '-'], " ")).to_lowercase()
}

/// Column positions of the schedule fields, built from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    columns: HashMap<Field, usize>,
}

impl HeaderMap {
    /// Builds the column lookup from a header row.
    ///
    /// When two columns name the same field the leftmost one is used.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MissingHeaders` listing every required field
    /// without a column.
    pub fn from_header(header: &RawRow) -> Result<Self, SchemaError> {
        let mut columns: HashMap<Field, usize> = HashMap::new();

        for (idx, cell) in header.cells.iter().enumerate() {
            if let Some(field) = Field::from_header(&normalize_header(&cell.to_text())) {
                columns.entry(field).or_insert(idx);
            }
        }

        let missing: Vec<&'static str> = Field::REQUIRED
            .iter()
            .filter(|field| !columns.contains_key(*field))
            .map(Field::name)
            .collect();

        if !missing.is_empty() {
            return Err(SchemaError::MissingHeaders { missing });
        }

        Ok(Self { columns })
    }

    /// Returns the 0-based column of a field, if mapped.
    #[must_use]
    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }
}

/// Normalized rows of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRows {
    /// Entries in source order.
    pub entries: Vec<ScheduleEntry>,
    /// Rows that failed normalization, in source order.
    pub errors: Vec<RowError>,
}

/// Normalizes every data row of a sheet.
///
/// # Arguments
///
/// * `rows` - The parsed rows; the first is the header
/// * `accepted_days` - Days a class may be scheduled on
///
/// # Errors
///
/// Returns a `SchemaError` if there is no header row or it lacks a
/// required column. No data row is examined in that case.
pub fn normalize_rows(
    rows: &[RawRow],
    accepted_days: &[Day],
) -> Result<NormalizedRows, SchemaError> {
    let Some((header, data)) = rows.split_first() else {
        return Err(SchemaError::NoHeaderRow);
    };

    let header_map: HeaderMap = HeaderMap::from_header(header)?;
    let mut normalized: NormalizedRows = NormalizedRows::default();

    for row in data {
        match normalize(row, &header_map, accepted_days) {
            Ok(entry) => normalized.entries.push(entry),
            Err(err) => {
                debug!(row = err.source_row, reason = %err.reason, "Row rejected");
                normalized.errors.push(err);
            }
        }
    }

    Ok(normalized)
}

/// Normalizes one data row.
///
/// Every problem with the row is collected into a single `RowError`.
///
/// # Errors
///
/// Returns a `RowError` if a required field is blank, the day is not
/// recognized, or the day is outside `accepted_days`.
pub fn normalize(
    row: &RawRow,
    headers: &HeaderMap,
    accepted_days: &[Day],
) -> Result<ScheduleEntry, RowError> {
    let get_field = |field: Field| -> Option<String> {
        headers
            .column(field)
            .and_then(|idx| row.cell(idx))
            .map(|cell| collapse_whitespace(&cell.to_text()))
            .filter(|value| !value.is_empty())
    };

    let mut errors: Vec<String> = Vec::new();

    let missing: Vec<&str> = Field::REQUIRED
        .iter()
        .filter(|field| get_field(**field).is_none())
        .map(Field::name)
        .collect();
    if !missing.is_empty() {
        errors.push(format!(
            "missing required field(s): {}",
            missing.join(", ")
        ));
    }

    let faculty: Option<FacultyName> =
        get_field(Field::Faculty).and_then(|value| FacultyName::parse(&value).ok());

    let day: Option<Day> = get_field(Field::Day).and_then(|value| match Day::parse(&value) {
        Ok(day) if accepted_days.contains(&day) => Some(day),
        Ok(day) => {
            errors.push(format!("day: {}", DomainError::DayNotAccepted(day)));
            None
        }
        Err(e) => {
            errors.push(format!("day: {e}"));
            None
        }
    });

    let time_slot: Option<TimeSlot> =
        get_field(Field::TimeSlot).and_then(|value| TimeSlot::parse(&value).ok());
    let subject: Option<String> = get_field(Field::Subject);

    let (Some(faculty), Some(day), Some(time_slot), Some(subject)) =
        (faculty, day, time_slot, subject)
    else {
        return Err(RowError::new(row.row_number, errors.join("; ")));
    };

    Ok(ScheduleEntry {
        faculty,
        day,
        time_slot,
        subject,
        room: get_field(Field::Room),
        batch: get_field(Field::Batch),
        level: get_field(Field::Level),
        source_row: row.row_number,
    })
}
