// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timetable::{ConflictPolicy, TransformConfig};

use super::helpers::{HEADER, create_test_request, create_test_time};
use crate::{ApiError, TransformRequest, run_transform_at};

#[test]
fn test_unreadable_file_is_invalid_input() {
    let request: TransformRequest = TransformRequest {
        original_name: String::from("notes.txt"),
        bytes: b"just some text".to_vec(),
        config: TransformConfig::default(),
    };

    let err: ApiError = run_transform_at(&request, create_test_time()).unwrap_err();

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "file"
    ));
    assert!(err.diagnostics().is_none());
}

#[test]
fn test_missing_sheet_is_invalid_sheet_input() {
    let mut request: TransformRequest = create_test_request(&[HEADER]);
    request.config.sheet = Some(String::from("Term 2"));

    let err: ApiError = run_transform_at(&request, create_test_time()).unwrap_err();

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("sheet"),
            message: String::from("Sheet 'Term 2' not found"),
        }
    );
}

#[test]
fn test_missing_header_is_invalid_input() {
    let request: TransformRequest = create_test_request(&[
        &["Faculty", "Time Slot", "Subject"],
        &["Dr. Rao", "9-10", "Maths"],
    ]);

    let err: ApiError = run_transform_at(&request, create_test_time()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid input for field 'headers': Missing required headers: day"
    );
}

#[test]
fn test_rejected_conflicts_are_a_rule_violation() {
    let mut request: TransformRequest = create_test_request(&[
        HEADER,
        &["Dr. Rao", "Monday", "9-10", "Maths", "101"],
        &["Dr. Iyer", "Monday", "9-10", "Physics", "101"],
    ]);
    request.config.conflict_policy = ConflictPolicy::Reject;

    let err: ApiError = run_transform_at(&request, create_test_time()).unwrap_err();

    let ApiError::DomainRuleViolation {
        rule, diagnostics, ..
    } = err
    else {
        panic!("expected a rule violation");
    };
    assert_eq!(rule, "no_conflicts");
    assert_eq!(diagnostics.conflicts.len(), 1);
    assert_eq!(diagnostics.conflicts[0].kind, "room");
}

#[test]
fn test_no_valid_rows_is_a_rule_violation_with_row_errors() {
    let request: TransformRequest =
        create_test_request(&[HEADER, &["", "Monday", "9-10", "Maths", "101"]]);

    let err: ApiError = run_transform_at(&request, create_test_time()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Domain rule violation (non_empty_output): No valid schedule entries to write"
    );
    let diagnostics = err.diagnostics().unwrap();
    assert_eq!(diagnostics.row_errors.len(), 1);
    assert_eq!(diagnostics.row_errors[0].row, 2);
    assert_eq!(
        diagnostics.row_errors[0].reason,
        "missing required field(s): faculty"
    );
}
