//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};

/// docpeek - show the first line of every Markdown and text file in a directory.
#[derive(Parser, Debug)]
#[command(name = "docpeek")]
#[command(
    author,
    version,
    about,
    long_about = r#"docpeek lists the .md, .txt and .mkd files directly inside DIR and shows
the first line of each one.

Output modes:
- table (default): bordered table with a bold header
- simple (-s): one "name"<TAB>first line record per file, for awk/fzf

Examples:
    docpeek
    docpeek notes/
    docpeek -s ~/docs | fzf
    docpeek --simple . | awk -F'\t' '{ print $2 }'
"#
)]
pub struct Cli {
    /// Directory to scan.
    #[arg(
        default_value = ".",
        value_name = "DIR",
        long_help = "Directory to scan (defaults to the current directory).\n\n\
Only the immediate entries are listed; sub-directories are not descended into."
    )]
    pub dir: PathBuf,

    /// Simple output for awk/fzf.
    #[arg(
        short,
        long,
        long_help = "Print one record per file instead of a table: the file name in double\n\
quotes, a tab, then the first line.\n\n\
Quotes and tabs inside names or lines are not escaped."
    )]
    pub simple: bool,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        long_help = "Disable the bold table header. This is useful when your terminal does not\n\
support ANSI styles. Styling is also skipped when NO_COLOR is set or stdout is not a terminal."
    )]
    pub no_color: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr, including files whose first line\n\
could not be read."
    )]
    pub verbose: bool,
}

impl Cli {
    /// Render settings selected by the flags
    pub fn render_config(&self) -> RenderConfig {
        let format = if self.simple {
            OutputFormat::Simple
        } else {
            OutputFormat::Table
        };
        RenderConfig::with_color(format, !self.no_color)
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let render_config = cli.render_config();
    crate::backends::scan::run_scan(&cli.dir, render_config)
}
