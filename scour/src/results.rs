use std::path::PathBuf;
use std::time::Duration;

/// One line of a file that contained the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchLine {
    /// 1-based line number within the file
    pub line_number: usize,
    /// The line text, original casing intact
    pub content: String,
}

/// All matching lines found in a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    /// The path to the file
    pub path: PathBuf,
    /// Matching lines in file order
    pub lines: Vec<MatchLine>,
}

/// The complete outcome of one scan run
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// The query the scan ran with, original casing
    pub query: String,
    /// Per-file matches, sorted by path; files without matches are omitted
    pub file_results: Vec<FileResult>,
    /// Total number of files enumerated for scanning
    pub files_scanned: usize,
    /// Number of files with at least one matching line
    pub files_matched: usize,
    /// Total number of matching lines across all files
    pub total_matches: usize,
    /// Number of files skipped because they could not be read
    pub files_skipped: usize,
    /// Worker thread count the scan ran with
    pub thread_count: usize,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl ScanReport {
    /// Creates an empty report for the given query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Adds one file's matches, keeping the aggregate counters in step.
    /// A file with no matching lines is not recorded.
    pub fn add_file_result(&mut self, file_result: FileResult) {
        if file_result.lines.is_empty() {
            return;
        }
        self.total_matches += file_result.lines.len();
        self.files_matched += 1;
        self.file_results.push(file_result);
    }
}
