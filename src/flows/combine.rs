//! Combine flow
//!
//! Flattens a root directory into one output file: one block per readable
//! text file, in traversal order. Per-file failures are reported and
//! skipped; only a missing root or a failing output stops the run.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::backends::scan::{walk_files, ScanItem};
use crate::core::console::Console;
use crate::core::error::CombineError;
use crate::core::file_reader::read_utf8;
use crate::core::model::{CombineConfig, CombineSummary, SkippedFile};
use crate::core::paths::{is_same_file, resolve_root};
use crate::core::render::write_block;

/// Combine every file under `config.root` into `config.output`
///
/// The root is checked before the output is touched, so a missing root
/// leaves no output file behind.
pub fn combine(config: &CombineConfig, console: &Console) -> Result<CombineSummary, CombineError> {
    let root = resolve_root(&config.root)?;
    console.info(&format!("Root: {}", root.display()));

    let file = File::create(&config.output).map_err(|source| CombineError::CreateOutput {
        path: config.output.clone(),
        source,
    })?;
    console.info(&format!("Output: {}", config.output.display()));

    let mut writer = BufWriter::new(file);
    let mut summary = combine_into(&root, &mut writer, Some(config.output.as_path()), console)
        .map_err(|source| CombineError::write(&config.output, source))?;
    writer
        .flush()
        .map_err(|source| CombineError::write(&config.output, source))?;

    summary.output = config.output.display().to_string();
    console.done(&summary.output);
    Ok(summary)
}

/// Write one block per file under `root` to `writer`
///
/// `root` must already be resolved. `exclude` names a file that is never
/// read, normally the output itself when it lives inside the root. Only
/// errors from `writer` are returned.
pub fn combine_into<W: Write>(
    root: &Path,
    writer: &mut W,
    exclude: Option<&Path>,
    console: &Console,
) -> io::Result<CombineSummary> {
    let mut summary = CombineSummary::default();

    for item in walk_files(root) {
        let entry = match item {
            ScanItem::File(entry) => entry,
            ScanItem::Error(skipped) => {
                console.skipped(&skipped);
                summary.record_skipped(skipped);
                continue;
            }
        };

        // Compared by identity so links to the output are caught too
        if let Some(exclude) = exclude {
            if is_same_file(&entry.path, exclude) {
                console.info(&format!("Excluded output file: {}", entry.relative));
                continue;
            }
        }

        let contents = match read_utf8(&entry.path) {
            Ok(c) => c,
            Err(e) => {
                let skipped = SkippedFile::new(&entry.relative, e.skip_code(), e.to_string());
                console.skipped(&skipped);
                summary.record_skipped(skipped);
                continue;
            }
        };

        write_block(writer, &entry.relative, &contents)?;

        console.added(&entry.relative);
        summary.record_added(entry.relative, contents.len());
    }

    Ok(summary)
}
