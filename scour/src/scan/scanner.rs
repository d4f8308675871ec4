use memmap2::Mmap;
use std::fs::{self, File};
use std::path::Path;
use tracing::trace;

use super::matcher::QueryMatcher;
use crate::config::EncodingMode;
use crate::errors::{ScanError, ScanResult};
use crate::results::{FileResult, MatchLine};

// Files at or above this size are memory-mapped instead of read into a buffer
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024; // 10MB

/// Decodes file bytes into a String according to the encoding mode
fn decode_bytes(bytes: &[u8], path: &Path, encoding_mode: EncodingMode) -> ScanResult<String> {
    match encoding_mode {
        EncodingMode::Strict => {
            String::from_utf8(bytes.to_vec()).map_err(|e| ScanError::encoding_error(path, e))
        }
        EncodingMode::Lossy => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn map_read_error(err: std::io::Error, path: &Path) -> ScanError {
    match err.kind() {
        std::io::ErrorKind::NotFound => ScanError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => ScanError::permission_denied(path),
        _ => ScanError::IoError(err),
    }
}

/// Scans single files line by line for the query.
///
/// Every failure here is confined to the file being scanned; the caller
/// decides whether to count or ignore it.
#[derive(Debug, Clone)]
pub struct FileScanner {
    matcher: QueryMatcher,
    encoding_mode: EncodingMode,
}

impl FileScanner {
    /// Creates a new FileScanner with the given matcher
    pub fn new(matcher: QueryMatcher, encoding_mode: EncodingMode) -> Self {
        Self {
            matcher,
            encoding_mode,
        }
    }

    fn read_contents(&self, path: &Path) -> ScanResult<String> {
        let large = fs::metadata(path)
            .map(|m| m.len() >= LARGE_FILE_THRESHOLD)
            .unwrap_or(false);

        if large {
            let file = File::open(path).map_err(|e| map_read_error(e, path))?;
            let mmap = unsafe { Mmap::map(&file) }.map_err(ScanError::IoError)?;
            decode_bytes(&mmap, path, self.encoding_mode)
        } else {
            let bytes = fs::read(path).map_err(|e| map_read_error(e, path))?;
            decode_bytes(&bytes, path, self.encoding_mode)
        }
    }

    /// Scans one file and returns its matching lines in file order, original
    /// casing intact. A final line without a terminator is still scanned.
    pub fn scan_file(&self, path: &Path) -> ScanResult<FileResult> {
        trace!("Scanning file: {}", path.display());

        let contents = self.read_contents(path)?;
        let lines = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| self.matcher.is_match(line))
            .map(|(index, line)| MatchLine {
                line_number: index + 1,
                content: line.to_string(),
            })
            .collect();

        Ok(FileResult {
            path: path.to_path_buf(),
            lines,
        })
    }
}
