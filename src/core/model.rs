//! Run model
//!
//! Configuration going into a combine run and the summary coming out of it.

use serde::Serialize;
use std::path::PathBuf;

/// Directory flattened when no root is given
pub const DEFAULT_ROOT: &str = "src";

/// File written when no output is given
pub const DEFAULT_OUTPUT: &str = "combined_src.txt";

/// Inputs of a combine run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineConfig {
    /// Directory to flatten (resolved to an absolute path before use)
    pub root: PathBuf,

    /// File receiving the combined output (truncated on open)
    pub output: PathBuf,
}

impl CombineConfig {
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
        }
    }
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT, DEFAULT_OUTPUT)
    }
}

/// A regular file reached during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path on disk
    pub path: PathBuf,

    /// Path relative to root, using '/' as separator
    pub relative: String,
}

/// Why a file was left out of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipCode {
    /// Could not be opened or read
    FileUnreadable,
    /// Contents are not valid UTF-8
    FileSkippedEncoding,
    /// The traversal itself failed at this path
    WalkError,
}

/// A file (or directory) that contributed no block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Path relative to root, using '/' as separator
    pub path: String,
    pub code: SkipCode,
    pub reason: String,
}

impl SkippedFile {
    pub fn new(path: impl Into<String>, code: SkipCode, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code,
            reason: reason.into(),
        }
    }
}

/// Outcome of a combine run
#[derive(Debug, Clone, Default, Serialize)]
pub struct CombineSummary {
    /// Output file the blocks were written to
    pub output: String,

    /// Relative paths of included files, in output order
    pub added: Vec<String>,

    /// Entries left out, in traversal order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,

    /// Bytes of file content written (headers excluded)
    pub content_bytes: u64,
}

impl CombineSummary {
    pub fn record_added(&mut self, relative: impl Into<String>, bytes: usize) {
        self.added.push(relative.into());
        self.content_bytes += bytes as u64;
    }

    pub fn record_skipped(&mut self, skipped: SkippedFile) {
        self.skipped.push(skipped);
    }
}
