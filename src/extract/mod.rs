//! Comment extraction: the comment spans of a scan, with delimiters stripped.

mod record;

pub use record::{CommentKind, CommentRecord, split_lines};

use std::iter::FusedIterator;

use crate::error::Result;
use crate::language::{LanguageRules, rules_for};
use crate::tokenize::Scanner;

/// Lazy filter over a [`Scanner`] yielding only its comments.
#[derive(Debug, Clone)]
pub struct Comments<'a, 'r> {
    spans: Scanner<'a, 'r>,
}

impl<'a, 'r> Comments<'a, 'r> {
    #[must_use]
    pub const fn new(spans: Scanner<'a, 'r>) -> Self {
        Self { spans }
    }
}

impl<'a> Iterator for Comments<'a, '_> {
    type Item = CommentRecord<'a>;

    fn next(&mut self) -> Option<CommentRecord<'a>> {
        self.spans
            .by_ref()
            .find_map(|span| CommentRecord::from_span(&span))
    }
}

impl FusedIterator for Comments<'_, '_> {}

/// Every comment in `text`, in order, using the built-in rules for `language_id`.
///
/// # Errors
/// Returns [`crate::ScanError::UnknownLanguage`] if the language is not known;
/// no partial result is produced.
pub fn extract_comments<'a>(text: &'a str, language_id: &str) -> Result<Vec<CommentRecord<'a>>> {
    let rules = rules_for(language_id)?;
    Ok(extract_with_rules(text, rules))
}

/// Every comment in `text` under already-resolved rules.
#[must_use]
pub fn extract_with_rules<'a>(text: &'a str, rules: &LanguageRules) -> Vec<CommentRecord<'a>> {
    comments(text, rules).collect()
}

/// Lazy variant of [`extract_with_rules`]; stop iterating to stop scanning.
#[must_use]
pub fn comments<'a, 'r>(text: &'a str, rules: &'r LanguageRules) -> Comments<'a, 'r> {
    Comments::new(Scanner::new(text, rules))
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
