use std::path::PathBuf;
use thiserror::Error;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur during a scan.
///
/// Only `InvalidRoot`, `ConfigError`, and `ThreadPool` are fatal; the
/// per-file variants are contained at the worker boundary and reported as a
/// skipped-file count in the final report.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Target directory not found or not a directory: {0}")]
    InvalidRoot(PathBuf),
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid UTF-8 in file {path}: {source}")]
    EncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

impl ScanError {
    pub fn invalid_root(path: impl Into<PathBuf>) -> Self {
        Self::InvalidRoot(path.into())
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn thread_pool(msg: impl Into<String>) -> Self {
        Self::ThreadPool(msg.into())
    }

    pub fn encoding_error(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::EncodingError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_creation() {
        let path = Path::new("test.txt");

        let err = ScanError::invalid_root(path);
        assert!(matches!(err, ScanError::InvalidRoot(_)));

        let err = ScanError::file_not_found(path);
        assert!(matches!(err, ScanError::FileNotFound(_)));

        let err = ScanError::permission_denied(path);
        assert!(matches!(err, ScanError::PermissionDenied(_)));

        let err = ScanError::config_error("missing query");
        assert!(matches!(err, ScanError::ConfigError(_)));

        let err = ScanError::thread_pool("pool exhausted");
        assert!(matches!(err, ScanError::ThreadPool(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = ScanError::invalid_root("/no/such/dir");
        assert_eq!(
            err.to_string(),
            "Target directory not found or not a directory: /no/such/dir"
        );

        let err = ScanError::file_not_found("test.txt");
        assert_eq!(err.to_string(), "File not found: test.txt");

        let err = ScanError::config_error("Missing required field");
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field"
        );
    }

    #[test]
    fn test_encoding_error_names_the_file() {
        let bad = String::from_utf8(vec![0x66, 0x6f, 0xff]).unwrap_err();
        let err = ScanError::encoding_error("data.bin", bad);
        assert!(err.to_string().contains("data.bin"));
    }
}
