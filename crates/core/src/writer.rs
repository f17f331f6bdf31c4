// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workbook serialization.
//!
//! Each faculty member gets one sheet holding a header row and one row per
//! class, in layout order. Sheet names follow the spreadsheet naming rules:
//! at most 31 characters, none of `[ ] : * ? / \`, no leading or trailing
//! apostrophe, and unique without regard to case.

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet};
use std::collections::HashSet;
use timetable_domain::{FacultyTimetable, ScheduleEntry};
use tracing::debug;

use crate::error::WriteError;

/// Column headers of every faculty sheet, in order.
pub const OUTPUT_HEADERS: [&str; 5] = ["Day", "Time Slot", "Subject", "Room", "Batch"];

/// Column headers of the summary sheet, in order.
pub const SUMMARY_HEADERS: [&str; 8] = [
    "Faculty",
    "Sheet",
    "Sessions",
    "UG Sessions",
    "PG Sessions",
    "Academic Level",
    "Teaching Days",
    "Scheduled Hours",
];

/// Name of the optional summary sheet.
pub const SUMMARY_SHEET: &str = "Summary";

/// Longest sheet name the format accepts.
pub const MAX_SHEET_NAME_CHARS: usize = 31;

/// Name used when a faculty name has no usable characters.
const FALLBACK_SHEET_NAME: &str = "Unknown";

/// Names the format reserves.
const RESERVED_SHEET_NAMES: &[&str] = &["History"];

const FORBIDDEN_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

const COLUMN_WIDTH: f64 = 18.0;

/// A serialized workbook and the sheets it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// The xlsx bytes.
    pub bytes: Vec<u8>,
    /// Sheet names in workbook order.
    pub sheet_names: Vec<String>,
}

/// Strips forbidden characters and caps a candidate sheet name.
#[must_use]
pub fn sanitize_sheet_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !FORBIDDEN_SHEET_CHARS.contains(c) && !c.is_control())
        .collect();
    let trimmed: &str = cleaned.trim().trim_matches('\'').trim();
    let capped: String = trimmed.chars().take(MAX_SHEET_NAME_CHARS).collect();
    let capped: &str = capped.trim_end();

    if capped.is_empty() {
        FALLBACK_SHEET_NAME.to_string()
    } else {
        capped.to_string()
    }
}

/// Assigns one unique sheet name per timetable, in order.
///
/// Collisions are compared case-insensitively against earlier names and
/// `taken`, and resolved by appending ` (2)`, ` (3)`, ... while staying
/// within the length cap.
#[must_use]
pub fn assign_sheet_names(timetables: &[FacultyTimetable], taken: &[&str]) -> Vec<String> {
    let mut used: HashSet<String> = RESERVED_SHEET_NAMES
        .iter()
        .chain(taken)
        .map(|name| name.to_lowercase())
        .collect();

    timetables
        .iter()
        .map(|timetable| {
            let base: String = sanitize_sheet_name(timetable.faculty.display());
            let mut candidate: String = base.clone();
            let mut counter: usize = 2;
            while used.contains(&candidate.to_lowercase()) {
                let suffix: String = format!(" ({counter})");
                let room: usize = MAX_SHEET_NAME_CHARS - suffix.chars().count();
                let stem: String = base.chars().take(room).collect();
                candidate = format!("{}{suffix}", stem.trim_end());
                counter += 1;
            }
            used.insert(candidate.to_lowercase());
            candidate
        })
        .collect()
}

/// Serializes the timetables into a single workbook.
///
/// # Arguments
///
/// * `timetables` - Faculty timetables in output order
/// * `include_summary` - Whether to prepend the summary sheet
///
/// # Errors
///
/// Returns `WriteError::NoEntries` if there is nothing to write, or a
/// serialization error from the xlsx library.
pub fn write(
    timetables: &[FacultyTimetable],
    include_summary: bool,
) -> Result<GeneratedArtifact, WriteError> {
    if timetables.iter().all(|t| t.entries.is_empty()) {
        return Err(WriteError::NoEntries);
    }

    let taken: &[&str] = if include_summary {
        &[SUMMARY_SHEET]
    } else {
        &[]
    };
    let names: Vec<String> = assign_sheet_names(timetables, taken);
    let header_format: Format = header_format();

    let mut workbook: Workbook = Workbook::new();
    let mut sheet_names: Vec<String> = Vec::with_capacity(names.len() + 1);

    if include_summary {
        let worksheet: &mut Worksheet = workbook.add_worksheet();
        worksheet.set_name(SUMMARY_SHEET)?;
        write_summary(worksheet, timetables, &names, &header_format)?;
        sheet_names.push(SUMMARY_SHEET.to_string());
    }

    for (timetable, name) in timetables.iter().zip(&names) {
        let worksheet: &mut Worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;
        write_header(worksheet, &OUTPUT_HEADERS, &header_format)?;

        for (idx, entry) in timetable.entries.iter().enumerate() {
            let row: u32 = data_row(idx, name)?;
            for (column, value) in (0u16..).zip(entry_cells(entry)) {
                if let Some(value) = value {
                    worksheet.write_string(row, column, value)?;
                }
            }
        }

        debug!(sheet = %name, rows = timetable.entries.len(), "Wrote faculty sheet");
        sheet_names.push(name.clone());
    }

    let bytes: Vec<u8> = workbook.save_to_buffer()?;
    Ok(GeneratedArtifact { bytes, sheet_names })
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x00D7_E4BC))
        .set_border(FormatBorder::Thin)
}

fn write_header(
    worksheet: &mut Worksheet,
    headers: &[&str],
    format: &Format,
) -> Result<(), WriteError> {
    for (column, header) in (0u16..).zip(headers) {
        worksheet.write_string_with_format(0, column, *header, format)?;
        worksheet.set_column_width(column, COLUMN_WIDTH)?;
    }
    Ok(())
}

/// Row index below the header; sheets cap out well before `u32::MAX`.
fn data_row(idx: usize, sheet: &str) -> Result<u32, WriteError> {
    u32::try_from(idx + 1).map_err(|_| WriteError::TooManyRows {
        sheet: sheet.to_string(),
    })
}

fn entry_cells(entry: &ScheduleEntry) -> [Option<String>; 5] {
    [
        Some(entry.day.to_string()),
        Some(entry.time_slot.label().to_string()),
        Some(entry.subject.clone()),
        entry.room.clone(),
        entry.batch.clone(),
    ]
}

fn write_summary(
    worksheet: &mut Worksheet,
    timetables: &[FacultyTimetable],
    names: &[String],
    header_format: &Format,
) -> Result<(), WriteError> {
    write_header(worksheet, &SUMMARY_HEADERS, header_format)?;

    for (idx, (timetable, name)) in timetables.iter().zip(names).enumerate() {
        let row: u32 = data_row(idx, SUMMARY_SHEET)?;
        let days: Vec<String> = timetable
            .teaching_days()
            .iter()
            .map(ToString::to_string)
            .collect();
        let hours: f64 = f64::from(timetable.scheduled_minutes()) / 60.0;

        worksheet.write_string(row, 0, timetable.faculty.display())?;
        worksheet.write_string(row, 1, name)?;
        worksheet.write_number(row, 2, count_as_f64(timetable.entries.len()))?;
        worksheet.write_number(row, 3, count_as_f64(timetable.sessions_at_level("UG")))?;
        worksheet.write_number(row, 4, count_as_f64(timetable.sessions_at_level("PG")))?;
        if let Some(level) = timetable.academic_level() {
            worksheet.write_string(row, 5, level.as_str())?;
        }
        worksheet.write_string(row, 6, days.join(", "))?;
        worksheet.write_number(row, 7, (hours * 100.0).round() / 100.0)?;
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn count_as_f64(count: usize) -> f64 {
    count as f64
}
