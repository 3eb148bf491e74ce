use crate::error::{ExtractError, Result};
use crate::extract::selector::FieldSelector;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Statistics for one completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub lines_scanned: usize,
    pub records_matched: usize,
}

impl ScanSummary {
    pub fn display_summary(&self) -> String {
        format!(
            "Scanned {} lines, matched {} records",
            self.lines_scanned, self.records_matched
        )
    }
}

/// Single-pass report scanner: applies one [`FieldSelector`] to every line of
/// a reader and writes each selected record to the output immediately.
///
/// Because records are written as they are encountered, output produced
/// before a fatal error (short record, read failure) is preserved.
pub struct ReportScanner {
    selector: FieldSelector,
}

impl ReportScanner {
    pub fn new(selector: FieldSelector) -> Self {
        Self { selector }
    }

    pub fn selector(&self) -> &FieldSelector {
        &self.selector
    }

    /// Scan any line source. Lines are numbered from 1 for diagnostics.
    pub fn scan<R: BufRead, W: Write>(&self, reader: R, out: &mut W) -> Result<ScanSummary> {
        let mut summary = ScanSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|source| ExtractError::Read {
                line: line_no,
                source,
            })?;
            summary.lines_scanned = line_no;

            if let Some(record) = self.selector.select(&line, line_no)? {
                writeln!(out, "{}", record).map_err(|source| ExtractError::Write { source })?;
                summary.records_matched += 1;
            }
        }

        Ok(summary)
    }

    /// Open a report file and scan it. The handle is dropped when the scan
    /// finishes, on success or error.
    pub fn scan_path<P: AsRef<Path>, W: Write>(&self, path: P, out: &mut W) -> Result<ScanSummary> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ExtractError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.scan(BufReader::new(file), out)
    }
}
