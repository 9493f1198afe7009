//! File scanning backend
//!
//! Uses walkdir for a depth-first traversal with each directory's entries
//! sorted by file name, so the same tree always yields the same sequence.

use std::path::Path;
use walkdir::WalkDir;

use crate::core::model::{FileEntry, SkipCode, SkippedFile};
use crate::core::paths::{make_relative, normalize_path};

/// One step of the traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanItem {
    File(FileEntry),
    Error(SkippedFile),
}

/// Lazily walk every regular file under `root`
///
/// Directories are not yielded. Symlinked directories are not descended,
/// while a symlink resolving to a regular file is yielded like any other
/// file. The iterator is single-pass; walking again needs a fresh call.
pub fn walk_files(root: &Path) -> impl Iterator<Item = ScanItem> + '_ {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().is_dir() || !path.is_file() {
                    return None;
                }
                let relative = make_relative(path, root)?;
                Some(ScanItem::File(FileEntry {
                    path: path.to_path_buf(),
                    relative,
                }))
            }
            Err(err) => {
                let relative = err
                    .path()
                    .map(|p| make_relative(p, root).unwrap_or_else(|| normalize_path(p)))
                    .filter(|p| !p.is_empty())
                    .unwrap_or_else(|| ".".to_string());
                let reason = err
                    .io_error()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| err.to_string());
                Some(ScanItem::Error(SkippedFile::new(
                    relative,
                    SkipCode::WalkError,
                    reason,
                )))
            }
        })
}
