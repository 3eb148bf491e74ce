//! `print-time` — print the per-contest elapsed times of an irvaudit report.
//!
//! For every line beginning with `TIME,`, prints the second comma-separated
//! field (elapsed seconds).

use auditgrep::{run_extractor, Cli, FieldSelector};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    process::exit(run_extractor(&cli, FieldSelector::timings()));
}
