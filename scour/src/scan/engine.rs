use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::matcher::QueryMatcher;
use super::scanner::FileScanner;
use crate::config::ScanConfig;
use crate::errors::{ScanError, ScanResult};
use crate::results::{FileResult, ScanReport};
use crate::walker::enumerate_files;

/// Runs a concurrent scan of the configured directory tree.
///
/// Files are claimed by workers from a shared cursor, one at a time, so a
/// handful of oversized files cannot leave the other workers idle. Each
/// worker keeps its matches in a local buffer and appends the buffer to the
/// shared collection exactly once, after its last file: synchronization is
/// O(workers), not O(files). Per-file read failures are logged, counted, and
/// never abort the run; the only fatal errors are an invalid root and a
/// worker pool that cannot be built.
pub fn scan(config: &ScanConfig) -> ScanResult<ScanReport> {
    info!(
        "Starting scan for {:?} under {}",
        config.query,
        config.root_path.display()
    );
    let started = Instant::now();

    let files = enumerate_files(
        &config.root_path,
        &config.file_extensions,
        &config.ignore_patterns,
    )?;
    debug!("Found {} files to scan", files.len());

    let scanner = FileScanner::new(QueryMatcher::new(config.query.clone()), config.encoding_mode);
    let thread_count = config.thread_count.get();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build()
        .map_err(|e| ScanError::thread_pool(e.to_string()))?;

    let cursor = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);
    let collected: Mutex<Vec<FileResult>> = Mutex::new(Vec::new());

    // The scope is the join barrier: it returns only after every worker has
    // drained the queue and merged its buffer.
    pool.scope(|scope| {
        for _ in 0..thread_count {
            scope.spawn(|_| {
                let mut local: Vec<FileResult> = Vec::new();
                loop {
                    let index = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(path) = files.get(index) else { break };
                    match scanner.scan_file(path) {
                        Ok(result) if !result.lines.is_empty() => local.push(result),
                        Ok(_) => {}
                        Err(err) => {
                            warn!("Skipping {}: {}", path.display(), err);
                            skipped.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
                collected.lock().unwrap().append(&mut local);
            });
        }
    });

    let mut file_results = collected.into_inner().unwrap();
    // Merge order depends on worker timing; sort so the report is stable
    file_results.sort_by(|a, b| a.path.cmp(&b.path));

    let mut report = ScanReport::new(config.query.clone());
    report.files_scanned = files.len();
    report.files_skipped = skipped.into_inner();
    report.thread_count = thread_count;
    for file_result in file_results {
        report.add_file_result(file_result);
    }
    report.elapsed = started.elapsed();

    info!(
        "Scan complete: {} matching lines in {} of {} files",
        report.total_matches, report.files_matched, report.files_scanned
    );

    Ok(report)
}
