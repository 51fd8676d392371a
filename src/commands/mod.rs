//! Subcommand implementations behind the `comment-scan` binary.

mod context;
mod count;
mod extract;
mod languages;

pub use context::{
    FileProcessResult, FileSkipReason, Reporter, ScanContext, SourceFile, load_config,
};
pub use count::{run_count, run_count_impl};
pub use extract::{run_extract, run_extract_impl};
pub use languages::{run_languages, run_languages_impl};
