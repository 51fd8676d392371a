use std::path::{Path, PathBuf};

use crate::counter::LineStats;
use crate::extract::CommentRecord;

/// Comments extracted from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileComments<'a> {
    pub path: &'a Path,
    pub language: &'a str,
    pub comments: Vec<CommentRecord<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLineStats {
    pub path: PathBuf,
    pub language: String,
    pub stats: LineStats,
}

/// Result of a `count` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountReport {
    pub files: Vec<FileLineStats>,
    /// Files skipped by an ignore-file directive.
    pub ignored: Vec<PathBuf>,
    pub total: LineStats,
}

impl CountReport {
    #[must_use]
    pub fn new(files: Vec<FileLineStats>, ignored: Vec<PathBuf>) -> Self {
        let mut total = LineStats::new();
        for file in &files {
            total.add(&file.stats);
        }
        Self {
            files,
            ignored,
            total,
        }
    }
}
