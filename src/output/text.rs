use std::fmt::Write;

use crate::error::Result;
use crate::extract::split_lines;
use crate::language::{Language, PatternKind};

use super::{ColorMode, CountReport, FileComments, ReportFormatter, ansi, is_no_color_set};

/// Indent of continuation lines under a multi-line comment.
const CONTINUATION_INDENT: &str = "    ";

pub struct TextFormatter {
    use_colors: bool,
    with_delimiters: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            with_delimiters: false,
        }
    }

    /// Print comments as written instead of just their commentary.
    #[must_use]
    pub const fn with_delimiters(mut self, with_delimiters: bool) -> Self {
        self.with_delimiters = with_delimiters;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !is_no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn block_syntax(language: &Language) -> Vec<String> {
        language
            .rules
            .block_comments
            .iter()
            .map(|block| {
                let mut syntax = match block.pattern_kind {
                    PatternKind::LuaLongBracket => "--[[ ]] --[=[ ]=]".to_string(),
                    _ => format!("{} {}", block.start, block.end),
                };
                if block.nestable {
                    syntax.push_str(" (nested)");
                }
                syntax
            })
            .collect()
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl ReportFormatter for TextFormatter {
    fn format_comments(&self, files: &[FileComments<'_>]) -> Result<String> {
        let mut output = String::new();
        let mut total = 0;

        for file in files {
            let path = file.path.display().to_string();
            for comment in &file.comments {
                let body = if self.with_delimiters {
                    comment.raw
                } else {
                    comment.text
                };
                let mut lines = split_lines(body);
                let first = lines.next().unwrap_or_default().trim();

                let location = format!("{path}:{}:{}", comment.line, comment.column);
                let _ = writeln!(
                    output,
                    "{}: {}: {first}",
                    self.colorize(&location, ansi::CYAN),
                    self.colorize(comment.kind.as_str(), ansi::YELLOW)
                );
                for line in lines {
                    let _ = writeln!(output, "{CONTINUATION_INDENT}{}", line.trim_end());
                }
            }
            total += file.comments.len();
        }

        if !files.is_empty() {
            output.push('\n');
        }
        let _ = writeln!(
            output,
            "Found {} in {}",
            plural(total, "comment"),
            plural(files.len(), "file")
        );
        Ok(output)
    }

    fn format_counts(&self, report: &CountReport) -> Result<String> {
        let mut output = String::new();

        for file in &report.files {
            let _ = writeln!(
                output,
                "{} ({})",
                self.colorize(&file.path.display().to_string(), ansi::CYAN),
                file.language
            );
            let _ = writeln!(output, "   Lines: {}", file.stats.total);
            let _ = writeln!(
                output,
                "   Breakdown: code={}, comment={}, blank={}",
                file.stats.code, file.stats.comment, file.stats.blank
            );
            output.push('\n');
        }

        let total = &report.total;
        let _ = writeln!(
            output,
            "Summary: {}, {} (code={}, comment={}, blank={})",
            plural(report.files.len(), "file"),
            plural(total.total, "line"),
            self.colorize(&total.code.to_string(), ansi::GREEN),
            self.colorize(&total.comment.to_string(), ansi::CYAN),
            total.blank
        );

        if !report.ignored.is_empty() {
            let _ = writeln!(
                output,
                "Ignored: {}",
                self.colorize(&plural(report.ignored.len(), "file"), ansi::YELLOW)
            );
            for path in &report.ignored {
                let _ = writeln!(output, "   {}", path.display());
            }
        }

        Ok(output)
    }

    fn format_languages(&self, languages: &[Language]) -> Result<String> {
        let mut output = String::new();

        for language in languages {
            let mut names: Vec<String> = language
                .extensions
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect();
            names.extend(language.filenames.iter().cloned());

            let mut syntax: Vec<String> = language
                .rules
                .line_comments
                .iter()
                .map(|line| line.marker.clone())
                .collect();
            syntax.extend(Self::block_syntax(language));

            let _ = writeln!(
                output,
                "{:<16} {:<28} {}",
                self.colorize(&language.name, ansi::CYAN),
                names.join(", "),
                syntax.join("  ")
            );
        }

        let _ = writeln!(output, "\n{}", plural(languages.len(), "language"));
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
