// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line front end: turns one master schedule into a faculty-wise
//! timetable workbook.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use timetable::{ConflictPolicy, InputFormat, TransformConfig};
use timetable_api::{ApiError, TransformRequest, TransformResponse, run_transform};
use timetable_domain::Day;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Faculty Timetable - splits a master schedule into one sheet per faculty member
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    /// Master schedule to read (xlsx, xlsm, xlsb, xls, ods or csv)
    input: PathBuf,

    /// Where to write the workbook. Defaults to the generated name in the
    /// current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a JSON summary of the run to this file
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// How to read the input. `auto` reads `.csv` files as CSV and
    /// everything else as a workbook.
    #[arg(short, long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// Sheet to read instead of the first one
    #[arg(short, long)]
    sheet: Option<String>,

    /// Comma-separated days classes may fall on (default: every day)
    #[arg(long, value_delimiter = ',', value_parser = parse_day)]
    days: Vec<Day>,

    /// Fail instead of warning when a faculty member or room is double-booked
    #[arg(long)]
    strict: bool,

    /// Add a summary sheet in front of the faculty sheets
    #[arg(long)]
    summary: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Auto,
    Workbook,
    Csv,
}

fn parse_day(value: &str) -> Result<Day, String> {
    Day::parse(value).map_err(|e| e.to_string())
}

impl Args {
    fn run(self) -> Result<()> {
        let bytes: Vec<u8> = fs::read(&self.input)
            .wrap_err_with(|| format!("failed to read {}", self.input.display()))?;

        let request: TransformRequest = TransformRequest {
            original_name: display_name(&self.input),
            bytes,
            config: self.config(),
        };

        match run_transform(&request) {
            Ok(response) => self.finish(&response),
            Err(err) => {
                self.write_failure_report(&err)?;
                Err(err.into())
            }
        }
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn config(&self) -> TransformConfig {
        let format: InputFormat = match self.format {
            FormatArg::Workbook => InputFormat::Workbook,
            FormatArg::Csv => InputFormat::Csv,
            FormatArg::Auto if has_csv_extension(&self.input) => InputFormat::Csv,
            FormatArg::Auto => InputFormat::Auto,
        };

        TransformConfig {
            format,
            sheet: self.sheet.clone(),
            days: if self.days.is_empty() {
                Day::ALL.to_vec()
            } else {
                self.days.clone()
            },
            conflict_policy: if self.strict {
                ConflictPolicy::Reject
            } else {
                ConflictPolicy::Advisory
            },
            include_summary: self.summary,
        }
    }

    fn finish(&self, response: &TransformResponse) -> Result<()> {
        let output: PathBuf = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&response.record.generated_name));

        fs::write(&output, &response.output)
            .wrap_err_with(|| format!("failed to write {}", output.display()))?;

        for row_error in &response.summary.diagnostics.row_errors {
            warn!("Row {}: {}", row_error.row, row_error.reason);
        }
        for conflict in &response.summary.diagnostics.conflicts {
            warn!("{}", conflict.message);
        }

        info!(
            output = %output.display(),
            sheets = response.summary.sheet_names.len(),
            entries = response.summary.entry_count,
            "Wrote timetable workbook"
        );

        if let Some(report) = &self.report {
            let body = serde_json::json!({
                "record": response.record,
                "summary": response.summary,
            });
            write_json(report, &body)?;
        }
        Ok(())
    }

    fn write_failure_report(&self, err: &ApiError) -> Result<()> {
        let Some(report) = &self.report else {
            return Ok(());
        };
        let body = serde_json::json!({
            "error": err.to_string(),
            "diagnostics": err.diagnostics(),
        });
        write_json(report, &body)
    }
}

fn write_json(path: &Path, body: &serde_json::Value) -> Result<()> {
    let text: String = serde_json::to_string_pretty(body).wrap_err("failed to encode report")?;
    fs::write(path, text).wrap_err_with(|| format!("failed to write {}", path.display()))
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let args: Args = Args::try_parse_from(["faculty-timetable", "master.xlsx"]).unwrap();

        assert_eq!(args.config(), TransformConfig::default());
        assert_eq!(args.output, None);
        assert_eq!(args.log_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_flags_map_onto_config() {
        let args: Args = Args::try_parse_from([
            "faculty-timetable",
            "master.xlsx",
            "--sheet",
            "Term 2",
            "--days",
            "mon,tue,Wednesday",
            "--strict",
            "--summary",
            "-o",
            "out.xlsx",
        ])
        .unwrap();

        let config: TransformConfig = args.config();
        assert_eq!(config.sheet.as_deref(), Some("Term 2"));
        assert_eq!(
            config.days,
            vec![Day::Monday, Day::Tuesday, Day::Wednesday]
        );
        assert_eq!(config.conflict_policy, ConflictPolicy::Reject);
        assert!(config.include_summary);
        assert_eq!(args.output, Some(PathBuf::from("out.xlsx")));
    }

    #[test]
    fn test_csv_extension_selects_csv() {
        let args: Args = Args::try_parse_from(["faculty-timetable", "master.CSV"]).unwrap();
        assert_eq!(args.config().format, InputFormat::Csv);

        let args: Args =
            Args::try_parse_from(["faculty-timetable", "master.csv", "--format", "workbook"])
                .unwrap();
        assert_eq!(args.config().format, InputFormat::Workbook);
    }

    #[test]
    fn test_unknown_day_is_rejected() {
        let result = Args::try_parse_from(["faculty-timetable", "master.xlsx", "--days", "mon,xyz"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_flags() {
        let args: Args = Args::try_parse_from(["faculty-timetable", "master.xlsx", "-vv"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::TRACE);

        let args: Args = Args::try_parse_from(["faculty-timetable", "master.xlsx", "-q"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn test_display_name_uses_file_name() {
        assert_eq!(
            display_name(Path::new("/tmp/uploads/master.xlsx")),
            "master.xlsx"
        );
    }
}
