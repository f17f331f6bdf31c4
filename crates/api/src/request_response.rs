// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use timetable::{TransformConfig, TransformOutput};
use timetable_domain::{Conflict, RowError};

/// API request to transform one master schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    /// The name the master schedule was uploaded under.
    pub original_name: String,
    /// The raw spreadsheet bytes.
    pub bytes: Vec<u8>,
    /// How to run the transformation.
    pub config: TransformConfig,
}

/// Record of one generated workbook.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedFileRecord {
    /// The name the master schedule was uploaded under.
    pub original_name: String,
    /// The name of the generated workbook.
    pub generated_name: String,
    /// When the workbook was generated (RFC 3339, UTC).
    pub created_at: String,
}

/// API response for a successful transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResponse {
    /// The generated file record.
    pub record: GeneratedFileRecord,
    /// The generated xlsx bytes.
    pub output: Vec<u8>,
    /// What the run produced and skipped.
    pub summary: TransformSummary,
}

/// A rejected input row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RowErrorInfo {
    /// The 1-based row number.
    pub row: usize,
    /// Why the row was rejected.
    pub reason: String,
}

impl From<&RowError> for RowErrorInfo {
    fn from(err: &RowError) -> Self {
        Self {
            row: err.source_row,
            reason: err.reason.clone(),
        }
    }
}

/// A double-booking between two input rows.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConflictInfo {
    /// `faculty` or `room`.
    pub kind: String,
    /// The earlier row.
    pub first_row: usize,
    /// The later row.
    pub second_row: usize,
    /// The day of the clash.
    pub day: String,
    /// The time slot of the clash.
    pub time_slot: String,
    /// A human-readable description.
    pub message: String,
}

impl From<&Conflict> for ConflictInfo {
    fn from(conflict: &Conflict) -> Self {
        Self {
            kind: conflict.kind.to_string(),
            first_row: conflict.first.source_row,
            second_row: conflict.second.source_row,
            day: conflict.first.day.to_string(),
            time_slot: conflict.first.time_slot.to_string(),
            message: conflict.to_string(),
        }
    }
}

/// Non-fatal findings of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostics {
    /// Rejected rows, in source order.
    pub row_errors: Vec<RowErrorInfo>,
    /// Conflicting pairs, in source order.
    pub conflicts: Vec<ConflictInfo>,
}

impl Diagnostics {
    /// Converts engine diagnostics into their API form.
    #[must_use]
    pub fn new(row_errors: &[RowError], conflicts: &[Conflict]) -> Self {
        Self {
            row_errors: row_errors.iter().map(RowErrorInfo::from).collect(),
            conflicts: conflicts.iter().map(ConflictInfo::from).collect(),
        }
    }

    /// Returns whether nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_errors.is_empty() && self.conflicts.is_empty()
    }
}

/// Serializable summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransformSummary {
    /// Sheet names in workbook order.
    pub sheet_names: Vec<String>,
    /// Number of faculty timetables written.
    pub faculty_count: usize,
    /// Number of entries written.
    pub entry_count: usize,
    /// Rows skipped and conflicts found.
    pub diagnostics: Diagnostics,
}

impl TransformSummary {
    /// Summarizes an engine output.
    #[must_use]
    pub fn from_output(output: &TransformOutput) -> Self {
        Self {
            sheet_names: output.artifact.sheet_names.clone(),
            faculty_count: output.timetables.len(),
            entry_count: output.report.valid_entries.len(),
            diagnostics: Diagnostics::new(&output.report.errors, &output.report.conflicts),
        }
    }
}
