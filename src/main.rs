//! combine-src - flatten a source tree into a single text file
//!
//! combine-src provides:
//! - Deterministic recursive traversal of a root directory
//! - One delimited block per file, labelled with its path relative to the root
//! - Skip-and-continue handling of unreadable or non-UTF-8 files

use clap::Parser;
use colored::Colorize;

mod backends;
mod cli;
mod core;
mod flows;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli::run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
