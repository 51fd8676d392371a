use rayon::prelude::*;

use crate::cli::{Cli, ExtractArgs};
use crate::error::Result;
use crate::extract::extract_with_rules;
use crate::language::Language;
use crate::output::FileComments;
use crate::EXIT_CONFIG_ERROR;

use super::context::{
    FileProcessResult, Reporter, ScanContext, SourceFile, exit_code, load_config,
};

/// Entry point for `comment-scan extract`.
#[must_use]
pub fn run_extract(args: &ExtractArgs, cli: &Cli) -> i32 {
    let reporter = Reporter::from_cli(cli);
    match run_extract_impl(args, cli, &reporter) {
        Ok(code) => code,
        Err(e) => {
            reporter.error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if configuration, `--lang` or a directory walk fails.
pub fn run_extract_impl(args: &ExtractArgs, cli: &Cli, reporter: &Reporter) -> Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let context = ScanContext::new(&config, &args.scan)?;
    let files = context.collect_files(&args.scan.paths)?;
    reporter.note(1, &format!("Extracting comments from {} files", files.len()));

    let results: Vec<(&SourceFile, FileProcessResult<(String, &Language)>)> = files
        .par_iter()
        .map(|file| (file, context.read_source(file)))
        .collect();

    let mut any_failed = false;
    let mut sources = Vec::with_capacity(results.len());
    for (file, result) in results {
        match result {
            FileProcessResult::Success((source, language)) => {
                reporter.note(2, &format!("{} ({})", file.path.display(), language.name));
                sources.push((file, source, language));
            }
            FileProcessResult::Skipped(reason) => any_failed |= reporter.skipped(file, &reason),
            FileProcessResult::Error(err) => {
                reporter.failed(file, &err);
                any_failed = true;
            }
        }
    }

    let reports: Vec<FileComments<'_>> = sources
        .par_iter()
        .map(|(file, source, language)| FileComments {
            path: &file.path,
            language: &language.name,
            comments: extract_with_rules(source, &language.rules),
        })
        .collect();

    let formatter = args.format.formatter(cli.color.into(), args.with_delimiters);
    let output = formatter.format_comments(&reports)?;
    print!("{output}");

    Ok(exit_code(any_failed))
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
