use crate::cli::{Cli, LanguagesArgs};
use crate::error::Result;
use crate::language::LanguageRegistry;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{Reporter, load_config};

/// Entry point for `comment-scan languages`.
#[must_use]
pub fn run_languages(args: &LanguagesArgs, cli: &Cli) -> i32 {
    let reporter = Reporter::from_cli(cli);
    match run_languages_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            reporter.error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// The rule table, custom languages from configuration included, rendered
/// in the requested format.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or a custom
/// language is malformed.
pub fn run_languages_impl(args: &LanguagesArgs, cli: &Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let registry = LanguageRegistry::with_custom_languages(&config.languages)?;
    args.format
        .formatter(cli.color.into(), false)
        .format_languages(registry.all())
}

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;
