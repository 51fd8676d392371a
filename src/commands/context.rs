use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, ScanArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{Result, ScanError};
use crate::language::{Language, LanguageRegistry};
use crate::output::{ColorMode, ErrorOutput};
use crate::scanner::{DEFAULT_EXCLUDES, DirectoryScanner, FileScanner, GlobFilter};
use crate::{EXIT_SKIPPED_FILES, EXIT_SUCCESS};

/// Reason a file produced no result. Not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSkipReason {
    /// Neither the file name nor the extension maps to a known language.
    UnknownLanguage,
    /// The file carries a `comment-scan:ignore-file` directive.
    IgnoredByDirective,
}

impl fmt::Display for FileSkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLanguage => write!(f, "no language matches this file"),
            Self::IgnoredByDirective => write!(f, "ignored by comment-scan directive"),
        }
    }
}

/// A file to process, and whether it was named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Named directly rather than found by walking a directory. Skipping an
    /// explicit file is reported and affects the exit code.
    pub explicit: bool,
}

/// Result of attempting to process a single file.
#[derive(Debug)]
pub enum FileProcessResult<T> {
    Success(T),
    Skipped(FileSkipReason),
    Error(ScanError),
}

/// Warnings and progress notes on stderr, filtered by `--quiet`/`--verbose`.
pub struct Reporter {
    output: ErrorOutput,
    quiet: bool,
    verbose: u8,
}

impl Reporter {
    #[must_use]
    pub fn new(color: ColorMode, quiet: bool, verbose: u8) -> Self {
        Self {
            output: ErrorOutput::new(color),
            quiet,
            verbose,
        }
    }

    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.color.into(), cli.quiet, cli.verbose)
    }

    pub fn error(&self, err: &ScanError) {
        self.output.print_scan_error(err);
    }

    pub fn warn(&self, message: &str, detail: Option<&str>) {
        if !self.quiet {
            self.output.print_warning(message, detail);
        }
    }

    /// Shown from verbosity `level` upward.
    pub fn note(&self, level: u8, message: &str) {
        if !self.quiet && self.verbose >= level {
            self.output.print_info(message);
        }
    }

    /// Report a file that produced no result. Returns `true` if the skip
    /// should fail the run.
    pub fn skipped(&self, file: &SourceFile, reason: &FileSkipReason) -> bool {
        let path = file.path.display();
        match reason {
            FileSkipReason::UnknownLanguage if file.explicit => {
                self.warn(
                    &format!("skipped {path}"),
                    Some("no language matches this file; pass --lang to choose one"),
                );
                true
            }
            _ => {
                self.note(2, &format!("skipped {path}: {reason}"));
                false
            }
        }
    }

    pub fn failed(&self, file: &SourceFile, err: &ScanError) {
        let detail = err.detail();
        self.warn(
            &format!("skipped {}: {err}", file.path.display()),
            detail.as_deref(),
        );
    }
}

/// Load configuration unless `--no-config` is set.
///
/// # Errors
/// Returns an error if the configuration file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Everything `extract` and `count` need to find and read files.
pub struct ScanContext {
    registry: LanguageRegistry,
    /// Canonical name of the language chosen with `--lang`.
    forced_language: Option<String>,
    scanner: DirectoryScanner<GlobFilter>,
}

impl ScanContext {
    /// Build from the effective configuration and the command-line overrides.
    ///
    /// # Errors
    /// Returns an error if a custom language is malformed, `--lang` names an
    /// unknown language, or an exclude pattern is invalid.
    pub fn new(config: &Config, args: &ScanArgs) -> Result<Self> {
        let registry = LanguageRegistry::with_custom_languages(&config.languages)?;

        let forced = args
            .lang
            .as_deref()
            .map(|id| {
                registry
                    .get(id)
                    .ok_or_else(|| ScanError::UnknownLanguage(id.to_string()))
            })
            .transpose()?;

        // `--lang` without `--ext` narrows directory walks to that language.
        let extensions = args.ext.clone().unwrap_or_else(|| {
            forced.map_or_else(
                || config.scan.extensions.clone(),
                |language| language.extensions.clone(),
            )
        });
        let mut exclude: Vec<String> = DEFAULT_EXCLUDES.iter().map(ToString::to_string).collect();
        exclude.extend(config.scan.exclude.iter().cloned());
        exclude.extend(args.exclude.iter().cloned());
        let filter = GlobFilter::new(&extensions, &exclude)?;

        let forced_language = forced.map(|language| language.name.clone());
        let use_gitignore = config.scan.gitignore && !args.no_gitignore;

        Ok(Self {
            registry,
            forced_language,
            scanner: DirectoryScanner::new(filter).with_gitignore(use_gitignore),
        })
    }

    #[must_use]
    pub const fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Expand `paths` into files: directories are walked, anything else is
    /// taken as an explicit file.
    ///
    /// # Errors
    /// Returns an error if a directory cannot be walked.
    pub fn collect_files(&self, paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
        let mut files = Vec::new();
        for path in paths {
            if path.is_dir() {
                files.extend(self.scanner.scan(path)?.into_iter().map(|path| SourceFile {
                    path,
                    explicit: false,
                }));
            } else {
                files.push(SourceFile {
                    path: path.clone(),
                    explicit: true,
                });
            }
        }
        Ok(files)
    }

    /// The forced language if any, else the one detected from the file name.
    #[must_use]
    pub fn language_for(&self, path: &Path) -> Option<&Language> {
        match &self.forced_language {
            Some(name) => self.registry.get(name),
            None => self.registry.detect(path),
        }
    }

    /// Read `file` and resolve its language. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn read_source(&self, file: &SourceFile) -> FileProcessResult<(String, &Language)> {
        let Some(language) = self.language_for(&file.path) else {
            return FileProcessResult::Skipped(FileSkipReason::UnknownLanguage);
        };

        match fs::read(&file.path) {
            Ok(bytes) => {
                let source = String::from_utf8(bytes).unwrap_or_else(|err| {
                    String::from_utf8_lossy(err.as_bytes()).into_owned()
                });
                FileProcessResult::Success((source, language))
            }
            Err(source) => FileProcessResult::Error(ScanError::FileRead {
                path: file.path.clone(),
                source,
            }),
        }
    }
}

#[must_use]
pub(crate) const fn exit_code(any_failed: bool) -> i32 {
    if any_failed {
        EXIT_SKIPPED_FILES
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
