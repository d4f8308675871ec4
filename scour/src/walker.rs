use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{ScanError, ScanResult};
use crate::filters::should_include_file;

/// Enumerates every regular file under `root`, recursively.
///
/// Fails with [`ScanError::InvalidRoot`] if `root` is missing or not a
/// directory; this is the only fatal precondition of a scan. Symlinks are
/// never followed, so a cyclic tree cannot hang the walk. Directories and
/// special files are excluded, unreadable subtrees are skipped with a
/// warning, and the result is sorted so repeated runs over an unchanged tree
/// enumerate identically.
pub fn enumerate_files(
    root: &Path,
    file_extensions: &Option<Vec<String>>,
    ignore_patterns: &[String],
) -> ScanResult<Vec<PathBuf>> {
    let metadata = fs::metadata(root).map_err(|_| ScanError::invalid_root(root))?;
    if !metadata.is_dir() {
        return Err(ScanError::invalid_root(root));
    }

    // Every regular file is a candidate: no gitignore handling, hidden files
    // included, filtering only through the explicitly configured patterns.
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(false)
        .follow_links(false);

    let mut files: Vec<PathBuf> = builder
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| should_include_file(entry.path(), file_extensions, ignore_patterns))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    debug!("Enumerated {} files under {}", files.len(), root.display());
    Ok(files)
}
