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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! Caller-facing boundary of the timetable engine.
//!
//! Wraps one transformation run with a generated file record and maps
//! engine failures onto the API error contract.

mod error;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use request_response::{
    ConflictInfo, Diagnostics, GeneratedFileRecord, RowErrorInfo, TransformRequest,
    TransformResponse, TransformSummary,
};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use timetable::{TransformOutput, transform};
use tracing::{error, info, warn};

/// Prefix of every generated workbook name.
pub const GENERATED_FILE_PREFIX: &str = "timetable_";

/// Extension of every generated workbook name.
pub const GENERATED_FILE_EXTENSION: &str = "xlsx";

/// Builds the name of a generated workbook from its creation time.
///
/// The name is `timetable_<unix-millis>.xlsx`.
#[must_use]
pub fn generated_file_name(created_at: OffsetDateTime) -> String {
    let millis: i128 = created_at.unix_timestamp_nanos() / 1_000_000;
    format!("{GENERATED_FILE_PREFIX}{millis}.{GENERATED_FILE_EXTENSION}")
}

/// Runs one transformation, stamped with the current UTC time.
///
/// # Errors
///
/// See [`run_transform_at`].
pub fn run_transform(request: &TransformRequest) -> Result<TransformResponse, ApiError> {
    run_transform_at(request, OffsetDateTime::now_utc())
}

/// Runs one transformation and records the generated file.
///
/// # Arguments
///
/// * `request` - The uploaded master schedule and run configuration
/// * `created_at` - The time to stamp the generated file with
///
/// # Returns
///
/// The generated workbook, its file record and a serializable summary of
/// the run, including non-fatal row errors and conflicts.
///
/// # Errors
///
/// Returns an `ApiError` if the engine fails at any stage or the timestamp
/// cannot be formatted.
pub fn run_transform_at(
    request: &TransformRequest,
    created_at: OffsetDateTime,
) -> Result<TransformResponse, ApiError> {
    info!(
        original_name = %request.original_name,
        bytes = request.bytes.len(),
        "Transformation requested"
    );

    let output: TransformOutput = transform(&request.bytes, &request.config).map_err(|failure| {
        error!(
            original_name = %request.original_name,
            stage = %failure.stage,
            reason = %failure.message(),
            row_errors = failure.row_errors.len(),
            conflicts = failure.conflicts.len(),
            "Transformation failed"
        );
        ApiError::from(failure)
    })?;

    for row_error in &output.report.errors {
        warn!(row = row_error.source_row, reason = %row_error.reason, "Row skipped");
    }

    let created_at_text: String = created_at.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Timestamp formatting failed: {e}"),
    })?;

    let record: GeneratedFileRecord = GeneratedFileRecord {
        original_name: request.original_name.clone(),
        generated_name: generated_file_name(created_at),
        created_at: created_at_text,
    };
    let summary: TransformSummary = TransformSummary::from_output(&output);

    info!(
        generated_name = %record.generated_name,
        sheets = summary.sheet_names.len(),
        "Generated timetable workbook"
    );

    Ok(TransformResponse {
        record,
        output: output.artifact.bytes,
        summary,
    })
}
