use clap::Parser;
use std::path::PathBuf;

/// Shared command line for both extractor binaries. Each binary takes a
/// single report path; the remaining flags only affect stderr diagnostics,
/// never the extracted records on stdout.
#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract fields from irvaudit report files")]
#[command(
    long_about = "Scans an irvaudit report line by line, selects records by their \
                  marker prefix and prints the configured comma-separated fields \
                  to standard output, one line per matching record."
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to an irvaudit report file
    pub report: PathBuf,

    /// Print a scan summary to stderr after a successful run
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress suggestion lines in error diagnostics
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
