use rayon::prelude::*;

use crate::EXIT_CONFIG_ERROR;
use crate::cli::{Cli, CountArgs};
use crate::counter::{CountResult, SlocCounter};
use crate::error::Result;
use crate::output::{CountReport, FileLineStats};

use super::context::{
    FileProcessResult, FileSkipReason, Reporter, ScanContext, SourceFile, exit_code, load_config,
};

/// Entry point for `comment-scan count`.
#[must_use]
pub fn run_count(args: &CountArgs, cli: &Cli) -> i32 {
    let reporter = Reporter::from_cli(cli);
    match run_count_impl(args, cli, &reporter) {
        Ok(code) => code,
        Err(e) => {
            reporter.error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if configuration, `--lang` or a directory walk fails.
pub fn run_count_impl(args: &CountArgs, cli: &Cli, reporter: &Reporter) -> Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let context = ScanContext::new(&config, &args.scan)?;
    let files = context.collect_files(&args.scan.paths)?;
    reporter.note(1, &format!("Counting lines in {} files", files.len()));

    let (report, any_failed) = count_files(&context, &files, reporter);

    let formatter = args.format.formatter(cli.color.into(), false);
    let output = formatter.format_counts(&report)?;
    print!("{output}");

    Ok(exit_code(any_failed))
}

fn count_file(context: &ScanContext, file: &SourceFile) -> FileProcessResult<FileLineStats> {
    let (source, language) = match context.read_source(file) {
        FileProcessResult::Success(read) => read,
        FileProcessResult::Skipped(reason) => return FileProcessResult::Skipped(reason),
        FileProcessResult::Error(err) => return FileProcessResult::Error(err),
    };

    match SlocCounter::new(&language.rules).count(&source) {
        CountResult::Stats(stats) => FileProcessResult::Success(FileLineStats {
            path: file.path.clone(),
            language: language.name.clone(),
            stats,
        }),
        CountResult::IgnoredFile => FileProcessResult::Skipped(FileSkipReason::IgnoredByDirective),
    }
}

/// Count every file in parallel. Returns the report and whether any skip or
/// read failure should fail the run.
pub(crate) fn count_files(
    context: &ScanContext,
    files: &[SourceFile],
    reporter: &Reporter,
) -> (CountReport, bool) {
    let results: Vec<FileProcessResult<FileLineStats>> = files
        .par_iter()
        .map(|file| count_file(context, file))
        .collect();

    let mut counted = Vec::with_capacity(results.len());
    let mut ignored = Vec::new();
    let mut any_failed = false;

    for (file, result) in files.iter().zip(results) {
        match result {
            FileProcessResult::Success(stats) => {
                reporter.note(2, &format!("{} ({})", file.path.display(), stats.language));
                counted.push(stats);
            }
            FileProcessResult::Skipped(FileSkipReason::IgnoredByDirective) => {
                ignored.push(file.path.clone());
            }
            FileProcessResult::Skipped(reason) => any_failed |= reporter.skipped(file, &reason),
            FileProcessResult::Error(err) => {
                reporter.failed(file, &err);
                any_failed = true;
            }
        }
    }

    (CountReport::new(counted, ignored), any_failed)
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
