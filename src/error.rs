use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to open report file: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line} of the report")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write extracted record")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: record has {found} fields, expected at least {needed}")]
    FieldOutOfRange {
        line: usize,
        needed: usize,
        found: usize,
    },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for ExtractError {
    fn user_message(&self) -> String {
        match self {
            ExtractError::Open { path, source } => {
                format!("Cannot open report file {}: {}", path.display(), source)
            }
            ExtractError::Read { line, source } => {
                format!("Read failed at line {}: {}", line, source)
            }
            ExtractError::Write { source } => {
                format!("Write to standard output failed: {}", source)
            }
            ExtractError::FieldOutOfRange {
                line,
                needed,
                found,
            } => {
                format!(
                    "Line {} matched the marker but has only {} comma-separated fields (need at least {})",
                    line, found, needed
                )
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ExtractError::Open { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some(
                    "Check that the path points to an audit report produced by irvaudit."
                        .to_string(),
                ),
                std::io::ErrorKind::PermissionDenied => {
                    Some("Ensure you have read permission for the report file.".to_string())
                }
                _ => None,
            },
            ExtractError::FieldOutOfRange { .. } => Some(
                "The report may be truncated or not an irvaudit output file; no lines after this point were processed."
                    .to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
