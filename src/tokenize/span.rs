use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Code,
    LineComment,
    BlockComment,
    /// String, character and regex literals.
    StringLiteral,
}

impl SpanKind {
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }
}

/// A contiguous, classified region of the scanned text.
///
/// `start..end` are byte offsets into the input; `text` is exactly that slice.
/// The opening and closing delimiter lengths are recorded so the content
/// between them can be recovered without matching the rules again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
    /// 1-based line of `start`.
    pub line: usize,
    /// 1-based column of `start`, in characters.
    pub column: usize,
    pub text: &'a str,
    open_len: usize,
    close_len: usize,
}

impl<'a> Span<'a> {
    pub(crate) const fn new(
        kind: SpanKind,
        start: usize,
        line: usize,
        column: usize,
        text: &'a str,
        delimiters: (usize, usize),
    ) -> Self {
        Self {
            kind,
            start,
            end: start + text.len(),
            line,
            column,
            text,
            open_len: delimiters.0,
            close_len: delimiters.1,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Lengths in bytes of the opening and closing delimiters.
    /// The closing length is zero for constructs closed implicitly.
    #[must_use]
    pub const fn delimiter_lengths(&self) -> (usize, usize) {
        (self.open_len, self.close_len)
    }

    /// Text between the delimiters.
    #[must_use]
    pub fn content(&self) -> &'a str {
        &self.text[self.open_len..self.text.len() - self.close_len]
    }

    /// Byte offset range of [`Self::content`] in the scanned input.
    #[must_use]
    pub const fn content_range(&self) -> std::ops::Range<usize> {
        (self.start + self.open_len)..(self.end - self.close_len)
    }

    /// Whether the construct reached its closing delimiter.
    /// Code spans and line comments have none and always report `true`.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        match self.kind {
            SpanKind::Code | SpanKind::LineComment => true,
            SpanKind::BlockComment | SpanKind::StringLiteral => self.close_len > 0,
        }
    }
}
