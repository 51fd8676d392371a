/// How a delimiter is recognized in the source text.
///
/// `Static` delimiters are plain literal sequences. The other variants compute
/// their opening length and closing sequence from the text at the match site,
/// because a single literal cannot describe them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternKind {
    /// Literal `open`/`close` sequences.
    #[default]
    Static,
    /// Rust raw strings: `r"…"`, `r#"…"#`, `br##"…"##`.
    RustRawString,
    /// C++11 raw strings: `R"delim(…)delim"`, optionally `u8R`, `uR`, `UR`, `LR`.
    CppRawString,
    /// Swift extended delimiters: `#"…"#`, `##"…"##`.
    SwiftExtendedString,
    /// Lua long brackets: `[[…]]`, `[==[…]==]`. With a `--` prefix they open a comment.
    LuaLongBracket,
    /// A quote that only opens a literal when it forms a well-shaped character
    /// literal (`'a'`, `'\n'`). Rust lifetimes and ML type variables stay code.
    CharLiteral,
    /// JavaScript-style `/…/flags`, only where an expression may start.
    RegexLiteral,
}

/// Escape convention inside a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// No escapes: the first closing delimiter always closes.
    None,
    /// The character consumes whatever follows it, including a closing delimiter.
    Char(char),
    /// A doubled closing delimiter stands for one literal delimiter (`'it''s'`).
    Doubled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringDelimiter {
    pub open: String,
    /// Empty means the literal runs to the end of the line (Zig `\\` line strings).
    pub close: String,
    pub escape: Escape,
    /// Single-line literals close implicitly at a line break.
    pub multiline: bool,
    pub pattern_kind: PatternKind,
}

impl StringDelimiter {
    /// Single-line literal with backslash escapes.
    #[must_use]
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
            escape: Escape::Char('\\'),
            multiline: false,
            pattern_kind: PatternKind::Static,
        }
    }

    /// Literal opened and closed by the same sequence.
    #[must_use]
    pub fn quoted(quote: &str) -> Self {
        Self::new(quote, quote)
    }

    #[must_use]
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Raw / verbatim literal: no escape processing.
    #[must_use]
    pub fn raw(mut self) -> Self {
        self.escape = Escape::None;
        self
    }

    /// Doubled-delimiter escaping (SQL, Pascal, C# verbatim strings).
    #[must_use]
    pub fn doubled(mut self) -> Self {
        self.escape = Escape::Doubled;
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = Escape::Char(escape);
        self
    }

    #[must_use]
    pub fn rust_raw() -> Self {
        Self::dynamic("r\"", "\"", PatternKind::RustRawString)
    }

    #[must_use]
    pub fn cpp_raw() -> Self {
        Self::dynamic("R\"(", ")\"", PatternKind::CppRawString)
    }

    #[must_use]
    pub fn swift_extended() -> Self {
        Self::dynamic("#\"", "\"#", PatternKind::SwiftExtendedString)
    }

    #[must_use]
    pub fn lua_long_bracket() -> Self {
        Self::dynamic("[[", "]]", PatternKind::LuaLongBracket)
    }

    /// `'x'` character literal that leaves lifetimes and primes alone.
    #[must_use]
    pub fn char_literal() -> Self {
        Self {
            pattern_kind: PatternKind::CharLiteral,
            ..Self::quoted("'")
        }
    }

    #[must_use]
    pub fn regex() -> Self {
        Self {
            pattern_kind: PatternKind::RegexLiteral,
            ..Self::quoted("/")
        }
    }

    fn dynamic(open: &str, close: &str, pattern_kind: PatternKind) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
            escape: Escape::None,
            multiline: true,
            pattern_kind,
        }
    }

    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self.escape, Escape::None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineComment {
    pub marker: String,
    /// Only opens a comment at the start of a word (shell `#` vs `$#`).
    pub word_start: bool,
}

impl LineComment {
    #[must_use]
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
            word_start: false,
        }
    }

    #[must_use]
    pub fn at_word_start(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
            word_start: true,
        }
    }
}

impl From<&str> for LineComment {
    fn from(marker: &str) -> Self {
        Self::new(marker)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockComment {
    pub start: String,
    pub end: String,
    pub nestable: bool,
    /// Both markers only count at the start of a line (Ruby `=begin`/`=end`).
    /// The closing line is consumed through its end.
    pub at_line_start: bool,
    pub pattern_kind: PatternKind,
}

impl BlockComment {
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            nestable: false,
            at_line_start: false,
            pattern_kind: PatternKind::Static,
        }
    }

    #[must_use]
    pub fn with_nesting(mut self) -> Self {
        self.nestable = true;
        self
    }

    #[must_use]
    pub fn at_line_start(mut self) -> Self {
        self.at_line_start = true;
        self
    }

    /// Lua `--[[ … ]]` / `--[==[ … ]==]`.
    #[must_use]
    pub fn lua_long_bracket() -> Self {
        Self {
            pattern_kind: PatternKind::LuaLongBracket,
            ..Self::new("--[[", "]]")
        }
    }
}

impl From<(&str, &str)> for BlockComment {
    fn from((start, end): (&str, &str)) -> Self {
        Self::new(start, end)
    }
}

/// Comment and string syntax of one language.
///
/// Line markers, block openers and string openers are each kept longest-first,
/// so a marker that is a prefix of another (`//` and `///`) never masks it.
/// Dynamic string patterns sort ahead of static ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageRules {
    pub line_comments: Vec<LineComment>,
    pub block_comments: Vec<BlockComment>,
    pub strings: Vec<StringDelimiter>,
}

impl LanguageRules {
    /// Rules from plain line markers and non-nesting block pairs.
    #[must_use]
    pub fn new(line_comments: &[&str], block_comments: &[(&str, &str)]) -> Self {
        Self::default()
            .with_line_comments(line_comments.iter().map(|&m| LineComment::new(m)).collect())
            .with_block_comments(block_comments.iter().map(|&b| b.into()).collect())
    }

    #[must_use]
    pub fn with_line_comments(mut self, line_comments: Vec<LineComment>) -> Self {
        self.line_comments.extend(line_comments);
        self.line_comments
            .sort_by(|a, b| b.marker.len().cmp(&a.marker.len()));
        self
    }

    #[must_use]
    pub fn with_block_comments(mut self, block_comments: Vec<BlockComment>) -> Self {
        self.block_comments.extend(block_comments);
        self.block_comments
            .sort_by(|a, b| b.start.len().cmp(&a.start.len()));
        self
    }

    #[must_use]
    pub fn with_strings(mut self, strings: Vec<StringDelimiter>) -> Self {
        self.strings.extend(strings);
        self.strings.sort_by_key(|s| {
            (
                s.pattern_kind == PatternKind::Static,
                std::cmp::Reverse(s.open.len()),
            )
        });
        self
    }

    /// Table of the first bytes at which any construct of this language can
    /// open. Positions starting with any other byte are plain code.
    #[must_use]
    pub fn lead_bytes(&self) -> [bool; 256] {
        let mut table = [false; 256];
        let mut mark = |s: &str| {
            if let Some(&b) = s.as_bytes().first() {
                table[usize::from(b)] = true;
            }
        };

        for line in &self.line_comments {
            mark(&line.marker);
        }
        for block in &self.block_comments {
            match block.pattern_kind {
                PatternKind::LuaLongBracket => mark("-"),
                _ => mark(&block.start),
            }
        }
        for string in &self.strings {
            match string.pattern_kind {
                PatternKind::RustRawString => {
                    mark("r");
                    mark("b");
                }
                PatternKind::CppRawString => mark("R"),
                PatternKind::SwiftExtendedString => mark("#"),
                PatternKind::LuaLongBracket => mark("["),
                PatternKind::CharLiteral => mark("'"),
                PatternKind::RegexLiteral => mark("/"),
                PatternKind::Static => mark(&string.open),
            }
        }
        table
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
