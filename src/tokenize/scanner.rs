use std::iter::FusedIterator;

use crate::language::{BlockComment, Escape, LanguageRules, PatternKind, StringDelimiter};

use super::matcher::{self, Opening};
use super::span::{Span, SpanKind};
use super::state::{Mode, ScannerState};

/// Single-pass, lazy tokenizer over one input.
///
/// Each call to [`Iterator::next`] consumes exactly one span. Spans are
/// contiguous and cover the whole input, so concatenating their text
/// reproduces it. Malformed input never fails: an unterminated string or
/// block comment simply runs to the end of the input (or, for single-line
/// strings, to the end of its line).
///
/// At a given position, string openers are tried before block comment
/// openers, and those before line comment markers. Within each group the
/// longest delimiter is tried first.
#[derive(Debug, Clone)]
pub struct Scanner<'a, 'r> {
    text: &'a str,
    rules: &'r LanguageRules,
    lead_bytes: [bool; 256],
    state: ScannerState<'r>,
}

impl<'a, 'r> Scanner<'a, 'r> {
    #[must_use]
    pub fn new(text: &'a str, rules: &'r LanguageRules) -> Self {
        Self {
            text,
            rules,
            lead_bytes: rules.lead_bytes(),
            state: ScannerState::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ScannerState<'r> {
        &self.state
    }

    #[must_use]
    pub const fn rules(&self) -> &'r LanguageRules {
        self.rules
    }

    fn rest(&self) -> &'a str {
        &self.text[self.state.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance one character, keeping line and column current.
    /// `\r\n` counts as a single line break.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.state.offset += c.len_utf8();
        let is_break = match c {
            '\n' => true,
            '\r' => self.peek() != Some('\n'),
            _ => false,
        };
        if is_break {
            self.state.line += 1;
            self.state.column = 1;
        } else if c != '\r' {
            self.state.column += 1;
        }
        Some(c)
    }

    fn bump_bytes(&mut self, len: usize) {
        let target = (self.state.offset + len).min(self.text.len());
        while self.state.offset < target {
            self.bump();
        }
    }

    fn skip_to_line_end(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' || c == '\r' {
                break;
            }
            self.bump();
        }
    }

    fn detect_opening(&self) -> Option<Mode<'r>> {
        let pos = self.state.offset;
        let rules = self.rules;

        for delimiter in &rules.strings {
            if let Some(Opening { len, close }) = matcher::match_string(self.text, pos, delimiter) {
                return Some(Mode::InString {
                    delimiter,
                    open_len: len,
                    close,
                });
            }
        }

        for comment in &rules.block_comments {
            if let Some(Opening { len, close }) = matcher::match_block(self.text, pos, comment) {
                return Some(Mode::InBlockComment {
                    comment,
                    open_len: len,
                    close,
                });
            }
        }

        rules
            .line_comments
            .iter()
            .find_map(|marker| matcher::match_line(self.text, pos, marker))
            .map(|marker_len| Mode::InLineComment { marker_len })
    }

    fn span(
        &self,
        kind: SpanKind,
        start: (usize, usize, usize),
        delimiters: (usize, usize),
    ) -> Span<'a> {
        let (offset, line, column) = start;
        Span::new(
            kind,
            offset,
            line,
            column,
            &self.text[offset..self.state.offset],
            delimiters,
        )
    }

    const fn mark(&self) -> (usize, usize, usize) {
        (self.state.offset, self.state.line, self.state.column)
    }

    /// Consume code up to the next construct opener, leaving the opener's mode
    /// in the state. Returns `None` when no code precedes it.
    fn scan_code(&mut self) -> Option<Span<'a>> {
        let start = self.mark();
        let text = self.text;
        let bytes = text.as_bytes();

        while self.state.offset < bytes.len() {
            let lead = bytes[self.state.offset];
            if self.lead_bytes[usize::from(lead)]
                && let Some(mode) = self.detect_opening()
            {
                self.state.mode = mode;
                break;
            }
            self.bump();
        }

        (self.state.offset > start.0).then(|| self.span(SpanKind::Code, start, (0, 0)))
    }

    fn scan_line_comment(&mut self, marker_len: usize) -> Span<'a> {
        let start = self.mark();
        self.bump_bytes(marker_len);
        self.skip_to_line_end();
        self.span(SpanKind::LineComment, start, (marker_len, 0))
    }

    fn scan_block_comment(
        &mut self,
        comment: &'r BlockComment,
        open_len: usize,
        close: &str,
    ) -> Span<'a> {
        let start = self.mark();
        self.bump_bytes(open_len);
        let mut depth = 1usize;
        self.state.max_depth = self.state.max_depth.max(depth);

        loop {
            if self.state.offset >= self.text.len() {
                return self.span(SpanKind::BlockComment, start, (open_len, 0));
            }

            if comment.nestable
                && let Some(nested) = matcher::match_block(self.text, self.state.offset, comment)
            {
                depth += 1;
                self.state.max_depth = self.state.max_depth.max(depth);
                self.bump_bytes(nested.len);
                continue;
            }

            let at_close = self.rest().starts_with(close)
                && (!comment.at_line_start || matcher::is_line_start(self.text, self.state.offset));
            if at_close {
                let close_start = self.state.offset;
                self.bump_bytes(close.len());
                depth -= 1;
                if depth == 0 {
                    if comment.at_line_start {
                        self.skip_to_line_end();
                    }
                    let close_len = self.state.offset - close_start;
                    return self.span(SpanKind::BlockComment, start, (open_len, close_len));
                }
                continue;
            }

            self.bump();
        }
    }

    fn scan_string(
        &mut self,
        delimiter: &StringDelimiter,
        open_len: usize,
        close: &str,
    ) -> Span<'a> {
        let start = self.mark();
        self.bump_bytes(open_len);
        let is_regex = delimiter.pattern_kind == PatternKind::RegexLiteral;
        let mut in_class = false;

        while let Some(c) = self.peek() {
            if let Escape::Char(escape) = delimiter.escape
                && c == escape
            {
                self.bump();
                if self.bump() == Some('\r') && self.peek() == Some('\n') {
                    self.bump();
                }
                continue;
            }

            if is_regex {
                match c {
                    '[' => in_class = true,
                    ']' => in_class = false,
                    _ => {}
                }
            }

            if !in_class && !close.is_empty() && self.rest().starts_with(close) {
                let doubled = delimiter.escape == Escape::Doubled
                    && self.rest()[close.len()..].starts_with(close);
                if doubled {
                    self.bump_bytes(close.len() * 2);
                    continue;
                }
                self.bump_bytes(close.len());
                return self.span(SpanKind::StringLiteral, start, (open_len, close.len()));
            }

            if !delimiter.multiline && (c == '\n' || c == '\r') {
                break;
            }

            self.bump();
        }

        self.span(SpanKind::StringLiteral, start, (open_len, 0))
    }
}

impl<'a> Iterator for Scanner<'a, '_> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        loop {
            let mode = std::mem::replace(&mut self.state.mode, Mode::Code);
            let span = match mode {
                Mode::Code => {
                    if let Some(code) = self.scan_code() {
                        return Some(code);
                    }
                    if matches!(self.state.mode, Mode::Code) {
                        return None;
                    }
                    continue;
                }
                Mode::InLineComment { marker_len } => self.scan_line_comment(marker_len),
                Mode::InBlockComment {
                    comment,
                    open_len,
                    close,
                } => self.scan_block_comment(comment, open_len, &close),
                Mode::InString {
                    delimiter,
                    open_len,
                    close,
                } => self.scan_string(delimiter, open_len, &close),
            };
            return Some(span);
        }
    }
}

impl FusedIterator for Scanner<'_, '_> {}

#[cfg(test)]
#[path = "scanner_tests/mod.rs"]
mod tests;
