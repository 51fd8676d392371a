mod error_output;
mod json;
mod report;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use report::{CountReport, FileComments, FileLineStats};
pub use text::TextFormatter;

use crate::error::Result;
use crate::language::Language;

/// Renders command results into a printable report.
pub trait ReportFormatter {
    /// Comments found in each file, in file order.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_comments(&self, files: &[FileComments<'_>]) -> Result<String>;

    /// Per-file line counts plus totals.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_counts(&self, report: &CountReport) -> Result<String>;

    /// The languages the rule table knows.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_languages(&self, languages: &[Language]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Formatter for this format.
    #[must_use]
    pub fn formatter(self, color: ColorMode, with_delimiters: bool) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new(color).with_delimiters(with_delimiters)),
            Self::Json => Box::new(JsonFormatter::new().with_delimiters(with_delimiters)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Checks if `NO_COLOR` is set. Any value, including empty, disables color.
fn is_no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
