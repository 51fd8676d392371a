//! Scanner test suite, organized by concern:
//! - `basic_tests`: span kinds, ordering and position metadata
//! - `string_context_tests`: comment markers inside literals
//! - `nested_comment_tests`: nestable vs non-nestable block comments
//! - `raw_string_tests`: raw and extended-delimiter strings
//! - `language_tests`: per-language quirks (Lua, Ruby, SQL, shell, ...)
//! - `regex_tests`: JavaScript regex literals vs division
//! - `edge_case_tests`: unterminated constructs, line endings, unicode

use super::*;
use crate::language::rules_for;
use crate::tokenize::{scan, tokenize};


/// `(kind, text)` of every span.
pub(super) fn spans<'a>(text: &'a str, language: &str) -> Vec<(SpanKind, &'a str)> {
    let rules = rules_for(language).unwrap();
    Scanner::new(text, rules).map(|s| (s.kind, s.text)).collect()
}

/// Full text of every comment span.
pub(super) fn comments<'a>(text: &'a str, language: &str) -> Vec<&'a str> {
    spans(text, language)
        .into_iter()
        .filter(|(kind, _)| kind.is_comment())
        .map(|(_, text)| text)
        .collect()
}

/// Spans must tile the input exactly.
pub(super) fn assert_lossless(text: &str, language: &str) {
    let rules = rules_for(language).unwrap();
    let mut expected_start = 0;
    let mut rebuilt = String::new();

    for span in Scanner::new(text, rules) {
        assert_eq!(span.start, expected_start, "gap or overlap in {text:?}");
        assert!(!span.is_empty(), "empty span in {text:?}");
        assert_eq!(&text[span.start..span.end], span.text);
        rebuilt.push_str(span.text);
        expected_start = span.end;
    }

    assert_eq!(rebuilt, text);
}
