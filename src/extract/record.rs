use serde::Serialize;

use crate::tokenize::{Span, SpanKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    Line,
    Block,
}

impl CommentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Block => "block",
        }
    }
}

/// One comment found in the input.
///
/// `start..end` covers the whole comment including its delimiters;
/// `text` is the commentary between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentRecord<'a> {
    pub kind: CommentKind,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
    pub text: &'a str,
    /// The comment exactly as written, delimiters included.
    #[serde(skip)]
    pub raw: &'a str,
}

impl<'a> CommentRecord<'a> {
    /// Comment record for a comment span; `None` for code and literals.
    #[must_use]
    pub fn from_span(span: &Span<'a>) -> Option<Self> {
        let kind = match span.kind {
            SpanKind::LineComment => CommentKind::Line,
            SpanKind::BlockComment => CommentKind::Block,
            SpanKind::Code | SpanKind::StringLiteral => return None,
        };
        Some(Self {
            kind,
            start: span.start,
            end: span.end,
            line: span.line,
            column: span.column,
            text: span.content(),
            raw: span.text,
        })
    }

    /// Number of lines the comment spans.
    #[must_use]
    pub fn line_count(&self) -> usize {
        let breaks = self.raw.matches('\n').count()
            + self.raw.matches('\r').count()
            - self.raw.matches("\r\n").count();
        breaks + 1
    }
}

/// Physical lines of `text`, breaking at `\n`, `\r\n` and a lone `\r`.
/// Like [`str::lines`], a trailing break does not open an empty last line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let text = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix(['\n', '\r']))
        .unwrap_or(text);
    text.split("\r\n").flat_map(|line| line.split(['\n', '\r']))
}
