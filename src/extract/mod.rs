pub mod scanner;
pub mod selector;

pub use scanner::{ReportScanner, ScanSummary};
pub use selector::FieldSelector;
