//! Fatal errors
//!
//! Anything in here stops the run. Per-file problems are not errors at this
//! level; they become [`SkippedFile`](crate::core::model::SkippedFile) entries.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombineError {
    #[error("root directory not found: {}", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("cannot resolve root directory {}", .path.display())]
    ResolveRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("root is not a directory: {}", .path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("cannot create output file {}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output file {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CombineError {
    /// Wrap an I/O error raised while writing to the output
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CombineError::WriteOutput {
            path: path.into(),
            source,
        }
    }
}
