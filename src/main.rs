//! docpeek - list documents in a directory with their first line
//!
//! docpeek provides:
//! - Non-recursive scanning for .md, .txt and .mkd files
//! - First-line extraction that tolerates unreadable files
//! - Table output for humans and tab-separated output for tools

use clap::Parser;
use tracing::Level;

mod backends;
mod cli;
mod core;

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = cli::run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
