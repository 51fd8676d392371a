use clap::Parser;

use comment_scan::cli::{Cli, Commands};
use comment_scan::commands::{run_count, run_extract, run_languages};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Extract(args) => run_extract(args, &cli),
        Commands::Count(args) => run_count(args, &cli),
        Commands::Languages(args) => run_languages(args, &cli),
    };

    std::process::exit(exit_code);
}
