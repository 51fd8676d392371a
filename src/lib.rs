//! Multi-language comment scanner.
//!
//! Source text is split into code, comment and string-literal spans by one
//! generic state machine driven by per-language rules. Comment markers inside
//! string literals are never mistaken for comments.
//!
//! ```
//! use comment_scan::extract_comments;
//!
//! let comments = extract_comments("x = \"http://example.com\"  // real comment", "js")?;
//! assert_eq!(comments.len(), 1);
//! assert_eq!(comments[0].text, " real comment");
//! # Ok::<(), comment_scan::ScanError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod extract;
pub mod language;
pub mod output;
pub mod scanner;
pub mod tokenize;

pub use counter::{LineStats, count_lines};
pub use error::{Result, ScanError};
pub use extract::{CommentKind, CommentRecord, extract_comments};
pub use language::{LanguageRules, rules_for};
pub use tokenize::{Scanner, Span, SpanKind, scan, tokenize};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SKIPPED_FILES: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
