use serde::Serialize;

use crate::language::LanguageRules;
use crate::tokenize::{Scanner, Span};

const IGNORE_FILE_DIRECTIVE: &str = "comment-scan:ignore-file";
const DIRECTIVE_SCAN_LINES: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    #[must_use]
    pub const fn sloc(&self) -> usize {
        self.code
    }

    pub const fn add(&mut self, other: &Self) {
        self.total += other.total;
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountResult {
    Stats(LineStats),
    IgnoredFile,
}

/// What the current physical line has touched so far.
#[derive(Debug, Default, Clone, Copy)]
struct LineFlags {
    started: bool,
    code: bool,
    comment: bool,
    /// The previous character was a `\r`, so a following `\n` is part of
    /// the same line break. Spans may split the pair.
    after_cr: bool,
}

impl LineFlags {
    fn finish(&mut self, stats: &mut LineStats) {
        stats.total += 1;
        if self.code {
            stats.code += 1;
        } else if self.comment {
            stats.comment += 1;
        } else {
            stats.blank += 1;
        }
        *self = Self::default();
    }
}

/// Classifies every physical line as code, comment or blank.
///
/// A line with any non-whitespace code or literal character is code. A line
/// that only touches comments (including blank lines inside a block comment)
/// is a comment line. Everything else is blank. Line breaks are `\n`, `\r\n`
/// and a lone `\r`; a trailing break does not open another line.
pub struct SlocCounter<'r> {
    rules: &'r LanguageRules,
}

impl<'r> SlocCounter<'r> {
    #[must_use]
    pub const fn new(rules: &'r LanguageRules) -> Self {
        Self { rules }
    }

    /// Line stats for `source`, or [`CountResult::IgnoredFile`] if one of its
    /// first ten lines carries the `comment-scan:ignore-file` directive.
    #[must_use]
    pub fn count(&self, source: &str) -> CountResult {
        self.tally(source, true)
            .map_or(CountResult::IgnoredFile, CountResult::Stats)
    }

    /// Line stats for `source` without looking for directives.
    #[must_use]
    pub fn count_stats(&self, source: &str) -> LineStats {
        self.tally(source, false).unwrap_or_default()
    }

    fn tally(&self, source: &str, honor_directive: bool) -> Option<LineStats> {
        let mut stats = LineStats::new();
        let mut flags = LineFlags::default();

        for span in Scanner::new(source, self.rules) {
            if honor_directive && span.kind.is_comment() && Self::has_ignore_file_directive(&span) {
                return None;
            }
            Self::process_span(&span, &mut flags, &mut stats);
        }

        if flags.started {
            flags.finish(&mut stats);
        }
        Some(stats)
    }

    /// The directive counts only if the line it sits on, not the line its
    /// comment opens on, is within the first ten.
    fn has_ignore_file_directive(span: &Span<'_>) -> bool {
        if span.line > DIRECTIVE_SCAN_LINES {
            return false;
        }
        span.text.find(IGNORE_FILE_DIRECTIVE).is_some_and(|at| {
            let before = &span.text[..at];
            let breaks = before.matches('\n').count() + before.matches('\r').count()
                - before.matches("\r\n").count();
            span.line + breaks <= DIRECTIVE_SCAN_LINES
        })
    }

    fn process_span(span: &Span<'_>, flags: &mut LineFlags, stats: &mut LineStats) {
        let is_comment = span.kind.is_comment();

        for c in span.text.chars() {
            if c == '\n' && flags.after_cr {
                flags.after_cr = false;
                continue;
            }
            flags.after_cr = false;
            flags.started = true;
            if is_comment {
                flags.comment = true;
            }

            match c {
                '\r' => {
                    flags.finish(stats);
                    flags.after_cr = true;
                }
                '\n' => flags.finish(stats),
                c if !is_comment && !c.is_whitespace() => flags.code = true,
                _ => {}
            }
        }
    }
}

/// Classify the lines of `text` under `rules`.
#[must_use]
pub fn count_lines(text: &str, rules: &LanguageRules) -> LineStats {
    SlocCounter::new(rules).count_stats(text)
}

#[cfg(test)]
#[path = "sloc_tests/mod.rs"]
mod tests;
