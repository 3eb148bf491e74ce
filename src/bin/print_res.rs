//! `print-res` — print the `EST` sample-size estimates of an irvaudit report.
//!
//! For every line beginning with `EST`, prints the second and third
//! comma-separated fields as `"<asn_ballots>,<asn_with_error>"`.

use auditgrep::{run_extractor, Cli, FieldSelector};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    process::exit(run_extractor(&cli, FieldSelector::estimates()));
}
