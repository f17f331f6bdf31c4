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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! Master schedule transformation engine.
//!
//! Turns one master schedule spreadsheet into a workbook with one sheet per
//! faculty member. See [`transform`] for the single entry point; the stage
//! modules are public for callers that need a single step.

mod config;
mod error;
pub mod layout;
pub mod normalize;
pub mod parser;
mod pipeline;
pub mod validate;
pub mod writer;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use config::{ConflictPolicy, InputFormat, TransformConfig};
pub use error::{FailureCause, ParseError, SchemaError, Stage, TransformFailure, WriteError};
pub use pipeline::{TransformOutput, transform};
pub use writer::GeneratedArtifact;
