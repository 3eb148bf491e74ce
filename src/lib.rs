//! # auditgrep
//!
//! Command-line filters for irvaudit report files.
//!
//! irvaudit, an IRV risk-limiting-audit planner, interleaves its results
//! with free-form log text. Two record shapes carry the numbers of
//! interest:
//!
//! - `EST,<asn_ballots>,<asn_with_error>` — overall sample-size estimates;
//! - `TIME,<seconds>,Nodes Expanded,...` — per-contest timing.
//!
//! The `print-res` and `print-time` binaries scan a report in a single
//! pass, select records by marker prefix and print the relevant fields,
//! one output line per matching record, in file order.
//!
//! ## Example
//!
//! ```
//! use auditgrep::{FieldSelector, ReportScanner};
//! use std::io::Cursor;
//!
//! let report = "SUMMARY\nEST,129,311\n";
//! let scanner = ReportScanner::new(FieldSelector::estimates());
//! let mut out = Vec::new();
//! scanner.scan(Cursor::new(report), &mut out).unwrap();
//! assert_eq!(out, b"129,311\n");
//! ```

pub mod cli;
pub mod error;
pub mod extract;
pub mod ui;

pub use cli::Cli;
pub use error::{ExtractError, Result, UserFriendlyError};
pub use extract::{FieldSelector, ReportScanner, ScanSummary};
pub use ui::Reporter;

use std::io::{self, Write};
use std::path::Path;

/// Run one extractor end to end: scan the report named on the command line
/// into a locked stdout and map the outcome to a process exit code.
///
/// Exit codes: 0 on success, 2 for a short matching record, 3 when the
/// report cannot be opened, 1 for any other failure.
pub fn run_extractor(cli: &Cli, selector: FieldSelector) -> i32 {
    let reporter = Reporter::new(cli.verbosity_level(), cli.quiet);
    let scanner = ReportScanner::new(selector);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = scanner.scan_path(&cli.report, &mut out).and_then(|summary| {
        out.flush().map_err(|source| ExtractError::Write { source })?;
        Ok(summary)
    });

    match result {
        Ok(summary) => {
            reporter.verbose(&summary.display_summary());
            0
        }
        Err(e) => {
            reporter.print_user_friendly_error(&e);

            match e {
                ExtractError::FieldOutOfRange { .. } => 2,
                ExtractError::Open { .. } => 3,
                _ => 1,
            }
        }
    }
}

/// Collect the `EST` estimate pairs of a report as `"<f1>,<f2>"` strings.
pub fn extract_estimates<P: AsRef<Path>>(report: P) -> Result<Vec<String>> {
    extract_with(FieldSelector::estimates(), report)
}

/// Collect the `TIME,` elapsed-seconds fields of a report.
pub fn extract_timings<P: AsRef<Path>>(report: P) -> Result<Vec<String>> {
    extract_with(FieldSelector::timings(), report)
}

fn extract_with<P: AsRef<Path>>(selector: FieldSelector, report: P) -> Result<Vec<String>> {
    let scanner = ReportScanner::new(selector);
    let mut buf = Vec::new();
    scanner.scan_path(report, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf)
        .lines()
        .map(str::to_string)
        .collect())
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
