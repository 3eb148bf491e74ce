use crate::error::{ExtractError, UserFriendlyError};
use console::{style, Term};

/// Stderr diagnostics for the extractor binaries.
///
/// Extracted records go to stdout untouched; everything here writes to
/// stderr so piped output stays clean.
pub struct Reporter {
    use_colors: bool,
    verbose: u8,
    quiet: bool,
}

impl Reporter {
    pub fn new(verbose: u8, quiet: bool) -> Self {
        let use_colors = Term::stderr().features().colors_supported() && !quiet;
        Self {
            use_colors,
            verbose: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    pub fn error(&self, message: &str) {
        if self.use_colors {
            eprintln!("{} {}", style("error:").red().bold(), message);
        } else {
            eprintln!("error: {}", message);
        }
    }

    pub fn verbose(&self, message: &str) {
        if self.verbose > 0 {
            if self.use_colors {
                eprintln!("{}", style(message).dim());
            } else {
                eprintln!("{}", message);
            }
        }
    }

    pub fn print_user_friendly_error(&self, error: &ExtractError) {
        self.error(&error.user_message());

        if self.quiet {
            return;
        }
        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                eprintln!("{}", style(format!("Suggestion: {}", suggestion)).cyan());
            } else {
                eprintln!("Suggestion: {}", suggestion);
            }
        }
    }
}
