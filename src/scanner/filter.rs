use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, ScanError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files by extension and rejects paths matching any exclude glob.
pub struct GlobFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a filter. Extensions are compared case-insensitively and may be
    /// written with or without a leading dot; an empty list accepts every file.
    ///
    /// # Errors
    /// Returns [`ScanError::InvalidPattern`] if any exclude pattern is invalid.
    pub fn new(extensions: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|source| ScanError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|source| ScanError::InvalidPattern {
                pattern: exclude_patterns.join(", "),
                source,
            })?;

        Ok(Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            exclude_patterns,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            })
    }

    /// Walks rooted at `.` yield `./target/a.rs`; patterns are written
    /// against `target/a.rs`, so the leading `./` is ignored.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(strip_dot_prefix(path))
    }
}

/// `./src/foo` and `.\src\foo` become `src/foo`.
fn strip_dot_prefix(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    path_str
        .strip_prefix("./")
        .or_else(|| path_str.strip_prefix(".\\"))
        .map_or_else(|| path.to_path_buf(), PathBuf::from)
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
