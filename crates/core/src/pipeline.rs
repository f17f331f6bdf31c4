// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transformation run: parse, normalize, validate, lay out, write.
//!
//! Stages run strictly in that order. The first fatal error ends the run
//! with a `TransformFailure` naming its stage; later stages never execute.

use timetable_domain::{FacultyTimetable, RawRow, ValidationReport};
use tracing::{debug, info};

use crate::config::{ConflictPolicy, TransformConfig};
use crate::error::{FailureCause, Stage, TransformFailure};
use crate::layout::layout;
use crate::normalize::{NormalizedRows, normalize_rows};
use crate::parser::parse;
use crate::validate::validate;
use crate::writer::{GeneratedArtifact, write};

/// The result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    /// The generated workbook.
    pub artifact: GeneratedArtifact,
    /// Valid entries plus the non-fatal row errors and conflicts.
    pub report: ValidationReport,
    /// The timetables that were written, in sheet order.
    pub timetables: Vec<FacultyTimetable>,
}

/// Transforms a master schedule into a faculty-wise workbook.
///
/// The call is pure apart from logging: it holds no state between runs and
/// may be invoked concurrently.
///
/// # Arguments
///
/// * `bytes` - The master schedule
/// * `config` - Settings for this run
///
/// # Errors
///
/// Returns a `TransformFailure` if the input cannot be parsed, the header
/// is incomplete, conflicts are found under `ConflictPolicy::Reject`, or
/// the workbook cannot be written (including when no row is valid).
pub fn transform(
    bytes: &[u8],
    config: &TransformConfig,
) -> Result<TransformOutput, TransformFailure> {
    debug!(stage = %Stage::Parse, bytes = bytes.len(), "Starting transformation");
    let rows: Vec<RawRow> = parse(bytes, config.format, config.sheet.as_deref())
        .map_err(|e| TransformFailure::new(Stage::Parse, e))?;

    debug!(stage = %Stage::Normalize, rows = rows.len(), "Entering stage");
    let normalized: NormalizedRows = normalize_rows(&rows, &config.days)
        .map_err(|e| TransformFailure::new(Stage::Normalize, e))?;

    debug!(stage = %Stage::Validate, entries = normalized.entries.len(), "Entering stage");
    let report: ValidationReport = validate(normalized.entries, normalized.errors);

    if config.conflict_policy == ConflictPolicy::Reject && report.has_conflicts() {
        return Err(TransformFailure::new(
            Stage::Validate,
            FailureCause::ConflictsRejected {
                count: report.conflicts.len(),
            },
        )
        .with_diagnostics(report.errors, report.conflicts));
    }

    debug!(stage = %Stage::Layout, "Entering stage");
    let timetables: Vec<FacultyTimetable> = layout(&report.valid_entries);

    debug!(stage = %Stage::Write, faculties = timetables.len(), "Entering stage");
    let artifact: GeneratedArtifact = match write(&timetables, config.include_summary) {
        Ok(artifact) => artifact,
        Err(e) => {
            return Err(TransformFailure::new(Stage::Write, e)
                .with_diagnostics(report.errors, report.conflicts));
        }
    };

    info!(
        rows = rows.len().saturating_sub(1),
        entries = report.valid_entries.len(),
        row_errors = report.errors.len(),
        conflicts = report.conflicts.len(),
        sheets = artifact.sheet_names.len(),
        "Transformation complete"
    );

    Ok(TransformOutput {
        artifact,
        report,
        timetables,
    })
}
