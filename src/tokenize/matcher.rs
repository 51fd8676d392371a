//! Opening-delimiter recognition at a single position.
//!
//! Every function here looks at `text[pos..]` (and, where the language needs
//! it, a little context before `pos`) and answers whether a construct opens
//! there. Dynamic delimiters also compute their closing sequence.

use std::borrow::Cow;

use crate::language::{BlockComment, LineComment, PatternKind, StringDelimiter};

/// A construct opening at the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Opening<'r> {
    /// Byte length of the opening delimiter.
    pub len: usize,
    pub close: Cow<'r, str>,
}

/// Keywords after which a `/` starts a regex rather than a division.
const REGEX_PRECEDING_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "instanceof",
    "case",
    "do",
    "else",
    "in",
    "of",
    "void",
    "yield",
    "delete",
    "throw",
    "new",
    "await",
];

/// Punctuation after which a `/` starts a regex rather than a division.
const REGEX_PRECEDING_PUNCT: &str = "(,=:[!&|?{};+-*%<>~^";

/// Longest C++ raw string delimiter allowed by the standard.
const CPP_RAW_DELIM_MAX: usize = 16;

/// Longest body of an escaped character literal (`'\u{10FFFF}'`).
const CHAR_ESCAPE_MAX: usize = 10;

const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

pub(super) fn is_line_start(text: &str, pos: usize) -> bool {
    pos == 0 || matches!(text.as_bytes()[pos - 1], b'\n' | b'\r')
}

fn is_word_start(text: &str, pos: usize) -> bool {
    pos == 0
        || matches!(
            text.as_bytes()[pos - 1],
            b' ' | b'\t' | b'\n' | b'\r' | b';' | b'|' | b'&' | b'(' | b')'
        )
}

pub(super) fn match_string<'r>(
    text: &str,
    pos: usize,
    delimiter: &'r StringDelimiter,
) -> Option<Opening<'r>> {
    let rest = &text[pos..];
    match delimiter.pattern_kind {
        PatternKind::Static => rest.starts_with(delimiter.open.as_str()).then(|| Opening {
            len: delimiter.open.len(),
            close: Cow::Borrowed(delimiter.close.as_str()),
        }),
        PatternKind::RustRawString => match_rust_raw_string(text, pos),
        PatternKind::CppRawString => match_cpp_raw_string(text, pos),
        PatternKind::SwiftExtendedString => match_swift_extended_string(rest),
        PatternKind::LuaLongBracket => match_lua_long_bracket(rest),
        PatternKind::CharLiteral => is_char_literal(rest).then(|| Opening {
            len: 1,
            close: Cow::Borrowed(delimiter.close.as_str()),
        }),
        PatternKind::RegexLiteral => (rest.starts_with(delimiter.open.as_str())
            && regex_may_start(text, pos))
        .then(|| Opening {
            len: 1,
            close: Cow::Borrowed(delimiter.close.as_str()),
        }),
    }
}

pub(super) fn match_block<'r>(
    text: &str,
    pos: usize,
    comment: &'r BlockComment,
) -> Option<Opening<'r>> {
    if comment.at_line_start && !is_line_start(text, pos) {
        return None;
    }

    let rest = &text[pos..];
    match comment.pattern_kind {
        PatternKind::LuaLongBracket => {
            let bracket = rest.strip_prefix("--")?;
            match_lua_long_bracket(bracket).map(|opening| Opening {
                len: opening.len + 2,
                close: opening.close,
            })
        }
        _ => rest.starts_with(comment.start.as_str()).then(|| Opening {
            len: comment.start.len(),
            close: Cow::Borrowed(comment.end.as_str()),
        }),
    }
}

/// Returns the marker length if `marker` opens a line comment at `pos`.
pub(super) fn match_line(text: &str, pos: usize, marker: &LineComment) -> Option<usize> {
    let matched = text[pos..].starts_with(marker.marker.as_str())
        && (!marker.word_start || is_word_start(text, pos));
    matched.then_some(marker.marker.len())
}

/// `r"`, `r#"`, `br##"`; the closing `"` carries the same number of `#`.
fn match_rust_raw_string(text: &str, pos: usize) -> Option<Opening<'static>> {
    let bytes = text.as_bytes();
    if pos > 0 && is_ident_byte(bytes[pos - 1]) {
        return None;
    }

    let mut i = pos;
    if bytes.get(i) == Some(&b'b') {
        i += 1;
    }
    if bytes.get(i) != Some(&b'r') {
        return None;
    }
    i += 1;

    let hashes = bytes[i..].iter().take_while(|&&b| b == b'#').count();
    i += hashes;
    if bytes.get(i) != Some(&b'"') {
        return None;
    }

    let close = if hashes == 0 {
        Cow::Borrowed("\"")
    } else {
        Cow::Owned(format!("\"{}", "#".repeat(hashes)))
    };
    Some(Opening {
        len: i + 1 - pos,
        close,
    })
}

/// `R"delim(` with an optional `u8`/`u`/`U`/`L` encoding prefix before the `R`.
fn match_cpp_raw_string(text: &str, pos: usize) -> Option<Opening<'static>> {
    let rest = text[pos..].strip_prefix("R\"")?;

    let bytes = text.as_bytes();
    let mut prefix_start = pos;
    while prefix_start > 0 && is_ident_byte(bytes[prefix_start - 1]) {
        prefix_start -= 1;
    }
    if !matches!(&text[prefix_start..pos], "" | "u8" | "u" | "U" | "L") {
        return None;
    }

    let window = &rest.as_bytes()[..rest.len().min(CPP_RAW_DELIM_MAX + 1)];
    let paren = window.iter().position(|&b| b == b'(')?;
    let delim = &rest[..paren];
    let valid = delim.len() <= CPP_RAW_DELIM_MAX
        && !delim
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ')' | '\\' | '"'));
    if !valid {
        return None;
    }

    Some(Opening {
        len: 2 + paren + 1,
        close: Cow::Owned(format!("){delim}\"")),
    })
}

/// `#"`, `##"`, and the multi-line `#"""` forms.
fn match_swift_extended_string(rest: &str) -> Option<Opening<'static>> {
    let hashes = rest.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 {
        return None;
    }
    let after = rest[hashes..].strip_prefix('"')?;
    let pounds = "#".repeat(hashes);

    if after.starts_with("\"\"") {
        return Some(Opening {
            len: hashes + 3,
            close: Cow::Owned(format!("\"\"\"{pounds}")),
        });
    }
    Some(Opening {
        len: hashes + 1,
        close: Cow::Owned(format!("\"{pounds}")),
    })
}

/// `[[` or `[=*[`; the closing bracket repeats the level of `=` signs.
fn match_lua_long_bracket(rest: &str) -> Option<Opening<'static>> {
    let after = rest.strip_prefix('[')?;
    let level = after.bytes().take_while(|&b| b == b'=').count();
    if after.as_bytes().get(level) != Some(&b'[') {
        return None;
    }

    let close = if level == 0 {
        Cow::Borrowed("]]")
    } else {
        Cow::Owned(format!("]{}]", "=".repeat(level)))
    };
    Some(Opening {
        len: level + 2,
        close,
    })
}

/// `'x'` or `'\…'` closing on the same line. Anything else (`'a` lifetimes,
/// `x'` primes, `1'000` digit separators) is not a literal.
fn is_char_literal(rest: &str) -> bool {
    let Some(body) = rest.strip_prefix('\'') else {
        return false;
    };
    let mut chars = body.chars();
    match chars.next() {
        Some('\\') => body[1..]
            .char_indices()
            .take_while(|&(i, c)| i <= CHAR_ESCAPE_MAX && c != '\n' && c != '\r')
            .any(|(_, c)| c == '\''),
        Some('\'' | '\n' | '\r') | None => false,
        Some(_) => chars.next() == Some('\''),
    }
}

/// A `/` opens a regex only where an expression may start, judged by the
/// last significant character or keyword before it.
fn regex_may_start(text: &str, pos: usize) -> bool {
    if matches!(text[pos + 1..].chars().next(), Some('/' | '*') | None) {
        return false;
    }

    let before = text[..pos].trim_end();
    match before.chars().next_back() {
        None => true,
        // `i++ / 2` and `i-- / 2` divide.
        Some(c @ ('+' | '-')) if before[..before.len() - 1].ends_with(c) => false,
        Some(c) if REGEX_PRECEDING_PUNCT.contains(c) => true,
        Some(c) if is_word_char(c) => {
            let word_len: usize = before
                .chars()
                .rev()
                .take_while(|&ch| is_word_char(ch))
                .map(char::len_utf8)
                .sum();
            let word = &before[before.len() - word_len..];
            REGEX_PRECEDING_KEYWORDS.contains(&word)
        }
        Some(_) => false,
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
