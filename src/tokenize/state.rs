use std::borrow::Cow;

use crate::language::{BlockComment, StringDelimiter};

/// What the scanner is consuming.
///
/// After a code span is emitted the mode already names the construct that
/// ended it, so the next call starts consuming that construct directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<'r> {
    Code,
    InLineComment {
        marker_len: usize,
    },
    InBlockComment {
        comment: &'r BlockComment,
        open_len: usize,
        close: Cow<'r, str>,
    },
    InString {
        delimiter: &'r StringDelimiter,
        open_len: usize,
        close: Cow<'r, str>,
    },
}

/// Transient position and mode of one scan. Owned by a single [`super::Scanner`].
#[derive(Debug, Clone)]
pub struct ScannerState<'r> {
    pub(super) offset: usize,
    pub(super) line: usize,
    pub(super) column: usize,
    pub(super) mode: Mode<'r>,
    /// Deepest block comment nesting seen so far.
    pub(super) max_depth: usize,
}

impl<'r> ScannerState<'r> {
    pub(super) const fn new() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
            mode: Mode::Code,
            max_depth: 0,
        }
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub const fn mode(&self) -> &Mode<'r> {
        &self.mode
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}
