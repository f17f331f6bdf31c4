// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Errors raised by the transformation stages.

use thiserror::Error;
use timetable_domain::{Conflict, RowError};

/// The input bytes are not a readable spreadsheet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No bytes were supplied.
    #[error("Input is empty")]
    Empty,

    /// The bytes do not start with a known workbook signature.
    #[error("Unrecognized file signature: expected an xlsx, xls or ods workbook")]
    UnrecognizedSignature,

    /// The container was recognized but could not be read.
    #[error("Workbook could not be read: {reason}")]
    Corrupt { reason: String },

    /// The workbook holds no sheets.
    #[error("Workbook contains no sheets")]
    NoSheets,

    /// The requested sheet does not exist.
    #[error("Sheet '{name}' not found")]
    SheetNotFound { name: String },

    /// The CSV text could not be read.
    #[error("CSV could not be read: {reason}")]
    Csv { reason: String },
}

/// The header row does not satisfy the column contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The sheet has no rows at all.
    #[error("Sheet has no header row")]
    NoHeaderRow,

    /// One or more required columns are absent.
    #[error("Missing required headers: {}", .missing.join(", "))]
    MissingHeaders { missing: Vec<&'static str> },
}

/// The output workbook could not be produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// There is nothing to write.
    #[error("No valid schedule entries to write")]
    NoEntries,

    /// A sheet has more rows than the format allows.
    #[error("Sheet '{sheet}' exceeds the maximum row count")]
    TooManyRows { sheet: String },

    /// The xlsx serializer rejected the content.
    #[error("Workbook serialization failed: {reason}")]
    Serialization { reason: String },
}

impl From<rust_xlsxwriter::XlsxError> for WriteError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

/// The stages of one transformation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Stage {
    Parse,
    Normalize,
    Validate,
    Layout,
    Write,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = match self {
            Self::Parse => "parse",
            Self::Normalize => "normalize",
            Self::Validate => "validate",
            Self::Layout => "layout",
            Self::Write => "write",
        };
        write!(f, "{name}")
    }
}

/// Why a run stopped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FailureCause {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Conflicts were found while the reject policy was in force.
    #[error("{count} scheduling conflict(s) found and conflicts are not permitted")]
    ConflictsRejected { count: usize },

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// A fatal failure of a transformation run.
///
/// Carries the stage that failed and every non-fatal diagnostic gathered
/// before the failure. Row errors and conflicts are always empty for
/// failures at the parse and normalize stages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{stage} stage failed: {cause}")]
pub struct TransformFailure {
    /// The stage that failed.
    pub stage: Stage,
    /// The failure itself.
    pub cause: FailureCause,
    /// Rows rejected before the failure.
    pub row_errors: Vec<RowError>,
    /// Conflicts found before the failure.
    pub conflicts: Vec<Conflict>,
}

impl TransformFailure {
    /// Creates a failure with no accumulated diagnostics.
    #[must_use]
    pub fn new(stage: Stage, cause: impl Into<FailureCause>) -> Self {
        Self {
            stage,
            cause: cause.into(),
            row_errors: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    /// Attaches the diagnostics gathered before the failure.
    #[must_use]
    pub fn with_diagnostics(mut self, row_errors: Vec<RowError>, conflicts: Vec<Conflict>) -> Self {
        self.row_errors = row_errors;
        self.conflicts = conflicts;
        self
    }

    /// Returns the human-readable failure reason.
    #[must_use]
    pub fn message(&self) -> String {
        self.cause.to_string()
    }
}
