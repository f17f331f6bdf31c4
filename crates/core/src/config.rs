// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-run transformation settings.

use serde::{Deserialize, Serialize};
use timetable_domain::Day;

/// How the input bytes should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputFormat {
    /// Detect a workbook container from its signature. Never guesses CSV.
    #[default]
    Auto,
    /// An xlsx, xlsm, xlsb, xls or ods workbook.
    Workbook,
    /// Comma-separated text.
    Csv,
}

/// What to do when double-bookings are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConflictPolicy {
    /// Report conflicts alongside the generated workbook.
    #[default]
    Advisory,
    /// Refuse to generate a workbook while any conflict exists.
    Reject,
}

/// Settings for one transformation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// How to read the input.
    pub format: InputFormat,
    /// The sheet to read. `None` reads the first sheet.
    pub sheet: Option<String>,
    /// Days a class may be scheduled on.
    pub days: Vec<Day>,
    /// Whether conflicts block generation.
    pub conflict_policy: ConflictPolicy,
    /// Whether to prepend a per-faculty summary sheet.
    pub include_summary: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            format: InputFormat::Auto,
            sheet: None,
            days: Day::ALL.to_vec(),
            conflict_policy: ConflictPolicy::Advisory,
            include_summary: false,
        }
    }
}
