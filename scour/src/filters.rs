use glob::Pattern;
use std::path::Path;

/// Checks if a file passes the optional extension allow-list.
/// With no allow-list configured, every file passes.
pub fn has_valid_extension(path: &Path, extensions: &Option<Vec<String>>) -> bool {
    let Some(exts) = extensions else { return true };
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| exts.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Checks if a file matches any of the ignore globs.
/// Unparseable globs are ignored rather than treated as matches.
pub fn should_ignore(path: &Path, ignore_patterns: &[String]) -> bool {
    if ignore_patterns.is_empty() {
        return false;
    }
    // Glob patterns are written with forward slashes
    let normalized = path.to_string_lossy().replace('\\', "/");
    ignore_patterns
        .iter()
        .filter_map(|pattern| Pattern::new(pattern).ok())
        .any(|pattern| pattern.matches(&normalized))
}

/// Determines if a file takes part in the scan
pub fn should_include_file(
    path: &Path,
    extensions: &Option<Vec<String>>,
    ignore_patterns: &[String],
) -> bool {
    has_valid_extension(path, extensions) && !should_ignore(path, ignore_patterns)
}
