// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::macros::date;

/// Day zero of the spreadsheet serial date system (1900 date system).
const SERIAL_EPOCH: Date = date!(1899 - 12 - 30);

const MINUTES_PER_DAY: f64 = 1440.0;

/// Largest serial day the format can hold (9999-12-31).
const MAX_SERIAL_DAYS: i64 = 2_958_465;

/// Trims a value and collapses every run of internal whitespace to a single space.
#[must_use]
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// A single untyped spreadsheet cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Cell {
    /// No value.
    #[default]
    Empty,
    /// A text value, exactly as stored.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Bool(bool),
    /// A date and/or time stored as a spreadsheet serial number.
    DateTime(f64),
}

impl Cell {
    /// Returns whether the cell carries no visible content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) | Self::Bool(_) | Self::DateTime(_) => false,
        }
    }

    /// Renders the cell as text.
    ///
    /// Whole numbers render without a fractional part, so a room stored
    /// as the number `101` becomes `"101"`. Serial times render as `HH:MM`.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Number(value) => render_number(*value),
            Self::Bool(value) => value.to_string(),
            Self::DateTime(serial) => render_serial(*serial),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn render_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn render_serial(serial: f64) -> String {
    if !serial.is_finite() || serial < 0.0 {
        return serial.to_string();
    }

    let mut days: i64 = serial.trunc() as i64;
    let mut minutes: i64 = (serial.fract() * MINUTES_PER_DAY).round() as i64;
    if minutes == 1440 {
        days += 1;
        minutes = 0;
    }

    let clock: String = format!("{:02}:{:02}", minutes / 60, minutes % 60);
    if days == 0 {
        return clock;
    }
    if days > MAX_SERIAL_DAYS {
        return serial.to_string();
    }

    let Some(day) = SERIAL_EPOCH.checked_add(time::Duration::days(days)) else {
        return serial.to_string();
    };

    if minutes == 0 {
        day.to_string()
    } else {
        format!("{day} {clock}")
    }
}

/// One row of the input grid, before any interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// The 1-based row number in the source sheet.
    pub row_number: usize,
    /// The cells of the row, in column order.
    pub cells: Vec<Cell>,
}

impl RawRow {
    /// Creates a new `RawRow`.
    #[must_use]
    pub const fn new(row_number: usize, cells: Vec<Cell>) -> Self {
        Self { row_number, cells }
    }

    /// Returns the cell at the given 0-based column, if present.
    #[must_use]
    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    /// Returns whether every cell in the row is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_blank)
    }
}

/// A day of the teaching week.
///
/// Variants are declared Monday first, so the derived ordering is the
/// canonical weekday ordering used for timetable layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Every day, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Resolves a day name against the canonical set.
    ///
    /// Accepts full names and the common abbreviations, in any case,
    /// with an optional trailing period (`"mon"`, `"Tues."`, `"THURSDAY"`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnrecognizedDay` if the value names no day.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let folded: String = value.trim().trim_end_matches('.').to_lowercase();
        match folded.as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" | "tues" => Ok(Self::Tuesday),
            "wednesday" | "wed" | "weds" => Ok(Self::Wednesday),
            "thursday" | "thu" | "thur" | "thurs" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            "saturday" | "sat" => Ok(Self::Saturday),
            "sunday" | "sun" => Ok(Self::Sunday),
            _ => Err(DomainError::UnrecognizedDay(value.trim().to_string())),
        }
    }

    /// Returns the title-cased canonical name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl FromStr for Day {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A faculty member's name.
///
/// The display spelling is kept as written (whitespace collapsed). Equality
/// and hashing use a case-folded key, so `"Dr. Rao"` and `"dr.  rao"`
/// identify the same faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct FacultyName {
    display: String,
    key: String,
}

impl FacultyName {
    /// Creates a `FacultyName` from a raw cell value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyFacultyName` if nothing remains after trimming.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let display: String = collapse_whitespace(value);
        if display.is_empty() {
            return Err(DomainError::EmptyFacultyName);
        }
        let key: String = display.to_lowercase();
        Ok(Self { display, key })
    }

    /// Returns the name as written.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the case-folded grouping key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for FacultyName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FacultyName {}

impl std::hash::Hash for FacultyName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl std::fmt::Display for FacultyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

impl From<FacultyName> for String {
    fn from(name: FacultyName) -> Self {
        name.display
    }
}

impl TryFrom<String> for FacultyName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
