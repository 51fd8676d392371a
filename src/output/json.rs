use serde::Serialize;

use crate::counter::LineStats;
use crate::error::Result;
use crate::extract::{CommentKind, CommentRecord};
use crate::language::{Language, PatternKind};

use super::{CountReport, FileComments, ReportFormatter};

#[derive(Debug, Default)]
pub struct JsonFormatter {
    with_delimiters: bool,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            with_delimiters: false,
        }
    }

    /// Emit each comment's text as written, delimiters included.
    #[must_use]
    pub const fn with_delimiters(mut self, with_delimiters: bool) -> Self {
        self.with_delimiters = with_delimiters;
        self
    }

    fn convert_comment<'a>(&self, comment: &CommentRecord<'a>) -> JsonComment<'a> {
        JsonComment {
            kind: comment.kind,
            line: comment.line,
            column: comment.column,
            start: comment.start,
            end: comment.end,
            text: if self.with_delimiters {
                comment.raw
            } else {
                comment.text
            },
        }
    }
}

#[derive(Serialize)]
struct CommentsOutput<'a> {
    summary: CommentsSummary,
    files: Vec<JsonFileComments<'a>>,
}

#[derive(Serialize)]
struct CommentsSummary {
    files: usize,
    comments: usize,
}

#[derive(Serialize)]
struct JsonFileComments<'a> {
    path: String,
    language: &'a str,
    comments: Vec<JsonComment<'a>>,
}

#[derive(Serialize)]
struct JsonComment<'a> {
    kind: CommentKind,
    line: usize,
    column: usize,
    start: usize,
    end: usize,
    text: &'a str,
}

#[derive(Serialize)]
struct CountsOutput<'a> {
    summary: CountsSummary,
    files: Vec<JsonFileStats<'a>>,
    ignored: Vec<String>,
}

#[derive(Serialize)]
struct CountsSummary {
    files: usize,
    ignored: usize,
    #[serde(flatten)]
    stats: LineStats,
}

#[derive(Serialize)]
struct JsonFileStats<'a> {
    path: String,
    language: &'a str,
    #[serde(flatten)]
    stats: LineStats,
}

#[derive(Serialize)]
struct JsonLanguage<'a> {
    name: &'a str,
    aliases: &'a [String],
    extensions: &'a [String],
    filenames: &'a [String],
    line_comments: Vec<&'a str>,
    block_comments: Vec<JsonBlockComment<'a>>,
}

#[derive(Serialize)]
struct JsonBlockComment<'a> {
    start: &'a str,
    end: &'a str,
    nested: bool,
    /// Lua long brackets take any level of `=` signs.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    leveled: bool,
}

impl ReportFormatter for JsonFormatter {
    fn format_comments(&self, files: &[FileComments<'_>]) -> Result<String> {
        let output = CommentsOutput {
            summary: CommentsSummary {
                files: files.len(),
                comments: files.iter().map(|file| file.comments.len()).sum(),
            },
            files: files
                .iter()
                .map(|file| JsonFileComments {
                    path: file.path.display().to_string(),
                    language: file.language,
                    comments: file
                        .comments
                        .iter()
                        .map(|comment| self.convert_comment(comment))
                        .collect(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_counts(&self, report: &CountReport) -> Result<String> {
        let output = CountsOutput {
            summary: CountsSummary {
                files: report.files.len(),
                ignored: report.ignored.len(),
                stats: report.total,
            },
            files: report
                .files
                .iter()
                .map(|file| JsonFileStats {
                    path: file.path.display().to_string(),
                    language: &file.language,
                    stats: file.stats,
                })
                .collect(),
            ignored: report
                .ignored
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_languages(&self, languages: &[Language]) -> Result<String> {
        let output: Vec<JsonLanguage<'_>> = languages
            .iter()
            .map(|language| JsonLanguage {
                name: &language.name,
                aliases: &language.aliases,
                extensions: &language.extensions,
                filenames: &language.filenames,
                line_comments: language
                    .rules
                    .line_comments
                    .iter()
                    .map(|line| line.marker.as_str())
                    .collect(),
                block_comments: language
                    .rules
                    .block_comments
                    .iter()
                    .map(|block| JsonBlockComment {
                        start: &block.start,
                        end: &block.end,
                        nested: block.nestable,
                        leveled: block.pattern_kind == PatternKind::LuaLongBracket,
                    })
                    .collect(),
            })
            .collect();

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
