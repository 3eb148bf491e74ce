use crate::error::{ExtractError, Result};

/// Per-line selection rule: a literal marker prefix plus the comma-separated
/// field positions to emit, in output order.
///
/// The two shipped rules intentionally differ in marker shape: `EST` matches
/// bare (so `EST,` and `ESTIMATE,` lines both qualify) while `TIME,` includes
/// the delimiter. This mirrors the irvaudit output format and must not be
/// "unified" without changing which lines match.
#[derive(Debug, Clone)]
pub struct FieldSelector {
    marker: String,
    fields: Vec<usize>,
}

impl FieldSelector {
    pub fn new<S: Into<String>>(marker: S, fields: Vec<usize>) -> Self {
        Self {
            marker: marker.into(),
            fields,
        }
    }

    /// Selector for the overall sample-size estimates:
    /// `EST,<asn_ballots>,<asn_with_error>` -> `<asn_ballots>,<asn_with_error>`.
    pub fn estimates() -> Self {
        Self::new("EST", vec![1, 2])
    }

    /// Selector for per-contest elapsed time:
    /// `TIME,<seconds>,Nodes Expanded,...` -> `<seconds>`.
    pub fn timings() -> Self {
        Self::new("TIME,", vec![1])
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Minimum number of fields a matching record must carry.
    pub fn required_fields(&self) -> usize {
        self.fields.iter().copied().max().map_or(0, |max| max + 1)
    }

    /// Apply the rule to one record. Returns `Ok(None)` for non-matching
    /// lines, the comma-joined selected fields for matching ones, and a
    /// fatal `FieldOutOfRange` when a matching record is too short.
    ///
    /// The line is stripped of trailing whitespace before splitting; fields
    /// themselves are never trimmed. Splitting is on every comma, with no
    /// quoting or escaping.
    pub fn select(&self, line: &str, line_no: usize) -> Result<Option<String>> {
        if !line.starts_with(&self.marker) {
            return Ok(None);
        }

        let tokens: Vec<&str> = line.trim_end().split(',').collect();
        let needed = self.required_fields();
        if tokens.len() < needed {
            return Err(ExtractError::FieldOutOfRange {
                line: line_no,
                needed,
                found: tokens.len(),
            });
        }

        let selected: Vec<&str> = self.fields.iter().map(|&i| tokens[i]).collect();
        Ok(Some(selected.join(",")))
    }
}
