//! Path utilities
//!
//! Root resolution plus normalization of entry paths to '/'-separated strings
//! relative to the root.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::core::error::CombineError;

/// Join a path's components with '/' (for cross-platform consistency)
///
/// Only real separators are rewritten; a backslash inside a Unix file name
/// stays as it is.
pub fn normalize_path(path: &Path) -> String {
    path.components()
        .map(|c| match c {
            Component::RootDir => Cow::Borrowed(""),
            other => other.as_os_str().to_string_lossy(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Resolve the root to an absolute, canonical directory path
pub fn resolve_root(root: &Path) -> Result<PathBuf, CombineError> {
    let resolved = root.canonicalize().map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CombineError::RootNotFound {
            path: root.to_path_buf(),
        },
        _ => CombineError::ResolveRoot {
            path: root.to_path_buf(),
            source,
        },
    })?;

    if !resolved.is_dir() {
        return Err(CombineError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }

    Ok(resolved)
}

/// Whether two paths name the same file on disk
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
