use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::language::{BlockComment, LanguageRules, LineComment, StringDelimiter};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    /// Custom language rows, in file order. A name equal to a built-in
    /// language replaces it.
    #[serde(default)]
    pub languages: IndexMap<String, CustomLanguageConfig>,
}

/// Defaults for directory walks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Extensions to scan. Empty means every extension the rule table knows.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Glob patterns for files and directories to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            exclude: Vec::new(),
            gitignore: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub line_comments: Vec<String>,

    #[serde(default)]
    pub block_comments: Vec<(String, String)>,

    /// Applies to every pair in `block_comments`.
    #[serde(default)]
    pub nested_comments: bool,

    #[serde(default)]
    pub strings: Vec<CustomStringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomStringConfig {
    pub open: String,

    /// Defaults to `open`. An empty closer runs the literal to the end of the line.
    #[serde(default)]
    pub close: Option<String>,

    /// Single escape character. Empty for raw strings.
    #[serde(default = "default_escape")]
    pub escape: String,

    /// A doubled closer stands for one literal closer (SQL `'it''s'`).
    #[serde(default)]
    pub doubled: bool,

    #[serde(default)]
    pub multiline: bool,
}

impl CustomLanguageConfig {
    /// Build rules for the language called `name`.
    ///
    /// # Errors
    /// Returns [`ScanError::InvalidLanguageDefinition`] if the row has no
    /// comment syntax, an empty marker or delimiter, or a multi-character escape.
    pub fn to_rules(&self, name: &str) -> Result<LanguageRules> {
        let invalid = |reason: String| ScanError::InvalidLanguageDefinition {
            language: name.to_string(),
            reason,
        };

        if self.line_comments.is_empty() && self.block_comments.is_empty() {
            return Err(invalid(
                "at least one line or block comment is required".to_string(),
            ));
        }
        if self.line_comments.iter().any(String::is_empty) {
            return Err(invalid("line comment markers must not be empty".to_string()));
        }
        if let Some((start, end)) = self
            .block_comments
            .iter()
            .find(|(start, end)| start.is_empty() || end.is_empty())
        {
            return Err(invalid(format!(
                "block comment delimiters must not be empty (got [\"{start}\", \"{end}\"])"
            )));
        }

        let line_comments = self
            .line_comments
            .iter()
            .map(|marker| LineComment::new(marker))
            .collect();
        let block_comments = self
            .block_comments
            .iter()
            .map(|(start, end)| {
                let comment = BlockComment::new(start, end);
                if self.nested_comments {
                    comment.with_nesting()
                } else {
                    comment
                }
            })
            .collect();
        let strings = self
            .strings
            .iter()
            .map(|string| string.to_delimiter().map_err(&invalid))
            .collect::<Result<Vec<_>>>()?;

        Ok(LanguageRules::default()
            .with_line_comments(line_comments)
            .with_block_comments(block_comments)
            .with_strings(strings))
    }
}

impl CustomStringConfig {
    fn to_delimiter(&self) -> std::result::Result<StringDelimiter, String> {
        if self.open.is_empty() {
            return Err("string delimiters must not be empty".to_string());
        }

        let close = self.close.as_deref().unwrap_or(&self.open);
        let mut delimiter = StringDelimiter::new(&self.open, close);

        let mut escape = self.escape.chars();
        delimiter = match (escape.next(), escape.next()) {
            (None, _) => delimiter.raw(),
            (Some(c), None) => delimiter.with_escape(c),
            (Some(_), Some(_)) => {
                return Err(format!(
                    "escape must be a single character (got \"{}\")",
                    self.escape
                ));
            }
        };
        if self.doubled {
            delimiter = delimiter.doubled();
        }
        if self.multiline {
            delimiter = delimiter.multiline();
        }
        Ok(delimiter)
    }
}

const fn default_true() -> bool {
    true
}

fn default_escape() -> String {
    "\\".to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
