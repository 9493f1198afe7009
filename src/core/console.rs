//! Console progress reporting
//!
//! Added files and the completion line go to stdout; skips go to stderr.

use colored::Colorize;

use crate::core::model::{CombineSummary, SkippedFile};

/// Where and how much progress is printed
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    /// Suppress `Added:` lines
    pub quiet: bool,

    /// Print diagnostics such as resolved paths
    pub verbose: bool,

    /// Print nothing at all
    pub silent: bool,
}

impl Console {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            silent: false,
        }
    }

    /// A console that prints nothing
    #[cfg(test)]
    pub fn silent() -> Self {
        Self {
            silent: true,
            ..Default::default()
        }
    }

    /// Turn ANSI colors off for the rest of the process
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    pub fn added(&self, relative: &str) {
        if self.silent || self.quiet {
            return;
        }
        println!("{} {}", "Added:".green(), relative);
    }

    pub fn skipped(&self, skipped: &SkippedFile) {
        if self.silent {
            return;
        }
        eprintln!("{} {}: {}", "Skipped".yellow(), skipped.path, skipped.reason);
    }

    pub fn info(&self, message: &str) {
        if self.silent || !self.verbose {
            return;
        }
        eprintln!("{}", message.dimmed());
    }

    pub fn done(&self, output: &str) {
        if self.silent {
            return;
        }
        println!("\n{} Check {} for the output.", "Done!".green().bold(), output);
    }

    pub fn stats(&self, summary: &CombineSummary) {
        if self.silent {
            return;
        }
        eprintln!("Combine Statistics:");
        eprintln!("   Files added: {}", summary.added.len());
        eprintln!("   Files skipped: {}", summary.skipped.len());
        eprintln!("   Content bytes: {}", summary.content_bytes);
        eprintln!();
    }
}
