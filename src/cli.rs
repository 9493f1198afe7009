//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::console::Console;
use crate::core::model::{CombineConfig, DEFAULT_OUTPUT, DEFAULT_ROOT};
use crate::flows::combine::combine;

/// combine-src - flatten a source tree into a single text file.
#[derive(Parser, Debug)]
#[command(name = "combine-src")]
#[command(
    author,
    version,
    about,
    long_about = r#"combine-src walks ROOT recursively and writes every file it finds into
OUTPUT, one block per file:

    (blank line)
    ==================================================
    File: <path relative to ROOT>
    ==================================================
    (blank line)
    <file contents>

Files are visited depth-first, sorted by name, so the same tree always
produces the same output. Files that cannot be read as UTF-8 are skipped
and reported on stderr.

Examples:
    combine-src
    combine-src --root crates/core --output core.txt
    combine-src --quiet --stats
"#
)]
pub struct Cli {
    /// Directory to flatten.
    #[arg(
        long,
        env = "COMBINE_SRC_ROOT",
        default_value = DEFAULT_ROOT,
        value_name = "DIR",
        long_help = "Directory to flatten (defaults to ./src).\n\n\
Block headers show paths relative to this directory. The run stops before\n\
creating OUTPUT if the directory does not exist."
    )]
    pub root: PathBuf,

    /// File to write the combined output to.
    #[arg(
        short,
        long,
        env = "COMBINE_SRC_OUTPUT",
        default_value = DEFAULT_OUTPUT,
        value_name = "FILE",
        long_help = "File to write the combined output to (defaults to ./combined_src.txt).\n\n\
Any existing content is overwritten. If the file lives inside ROOT it is\n\
left out of its own output."
    )]
    pub output: PathBuf,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no per-file progress).
    #[arg(
        short,
        long,
        long_help = "Do not print an `Added:` line per file. Skipped files, errors and the\n\
completion line are still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Print the resolved root and output paths, and note when the output file\n\
is excluded from its own traversal. Diagnostics go to stderr."
    )]
    pub verbose: bool,

    /// Show combine statistics on stderr.
    #[arg(
        long,
        long_help = "Print file counts and total content bytes to stderr after the run."
    )]
    pub stats: bool,

    /// Print the run summary as JSON on stdout.
    #[arg(
        long,
        long_help = "After the run, print one JSON object to stdout listing the output file,\n\
the added paths, the skipped paths with their reasons, and the content byte total."
    )]
    pub json: bool,
}

impl Cli {
    pub fn config(&self) -> CombineConfig {
        CombineConfig::new(&self.root, &self.output)
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        Console::disable_color();
    }
    let console = Console::new(cli.quiet, cli.verbose);

    let summary = combine(&cli.config(), &console)?;

    if cli.stats {
        console.stats(&summary);
    }
    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}
