//! Tokenizing scanner: splits source text into code, comment and literal spans.

mod matcher;
mod scanner;
mod span;
mod state;

pub use scanner::Scanner;
pub use span::{Span, SpanKind};
pub use state::{Mode, ScannerState};

use crate::error::Result;
use crate::language::rules_for;

/// Lazily scan `text` with the built-in rules for `language_id`.
///
/// # Errors
/// Returns [`crate::ScanError::UnknownLanguage`] before producing any span if
/// the language is not in the built-in table.
pub fn scan<'a>(text: &'a str, language_id: &str) -> Result<Scanner<'a, 'static>> {
    let rules = rules_for(language_id)?;
    Ok(Scanner::new(text, rules))
}

/// Eagerly collect every span of `text`.
///
/// # Errors
/// Returns [`crate::ScanError::UnknownLanguage`] if the language is not known.
pub fn tokenize<'a>(text: &'a str, language_id: &str) -> Result<Vec<Span<'a>>> {
    Ok(scan(text, language_id)?.collect())
}
