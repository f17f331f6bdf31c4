// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use timetable::{FailureCause, ParseError, TransformFailure, WriteError};

use crate::request_response::Diagnostics;

/// API-level errors.
///
/// These are distinct from engine errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A scheduling rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
        /// Row errors and conflicts found before the run stopped.
        diagnostics: Diagnostics,
    },
    /// The uploaded input is unusable.
    InvalidInput {
        /// The part of the input that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the diagnostics attached to a rule violation.
    #[must_use]
    pub const fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Self::DomainRuleViolation { diagnostics, .. } => Some(diagnostics),
            Self::InvalidInput { .. } | Self::Internal { .. } => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message, .. } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<TransformFailure> for ApiError {
    fn from(failure: TransformFailure) -> Self {
        let message: String = failure.message();
        let diagnostics: Diagnostics = Diagnostics::new(&failure.row_errors, &failure.conflicts);

        match failure.cause {
            FailureCause::Parse(ParseError::SheetNotFound { .. }) => Self::InvalidInput {
                field: String::from("sheet"),
                message,
            },
            FailureCause::Parse(_) => Self::InvalidInput {
                field: String::from("file"),
                message,
            },
            FailureCause::Schema(_) => Self::InvalidInput {
                field: String::from("headers"),
                message,
            },
            FailureCause::ConflictsRejected { .. } => Self::DomainRuleViolation {
                rule: String::from("no_conflicts"),
                message,
                diagnostics,
            },
            FailureCause::Write(WriteError::NoEntries) => Self::DomainRuleViolation {
                rule: String::from("non_empty_output"),
                message,
                diagnostics,
            },
            FailureCause::Write(WriteError::TooManyRows { .. } | WriteError::Serialization { .. }) => {
                Self::Internal { message }
            }
        }
    }
}
