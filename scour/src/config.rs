use config::{Config as ConfigBuilder, File};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::errors::{ScanError, ScanResult};

/// How undecodable file content is handled.
///
/// `Lossy` replaces invalid UTF-8 sequences and keeps scanning, so binary
/// files are searched best-effort. `Strict` reports the file as unreadable
/// instead; the rest of the scan is unaffected either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    #[default]
    Lossy,
    Strict,
}

/// Configuration for one scan run.
///
/// Values can be loaded from YAML config files in order of precedence:
/// 1. Custom config file passed via `--config`
/// 2. Local `.scour.yaml` in the current directory
/// 3. Global `$CONFIG_DIR/scour/config.yaml`
///
/// CLI arguments take precedence over file values; the merging behavior is
/// defined in [`ScanConfig::merge_with_cli`]. Example config:
/// ```yaml
/// root_path: "."
/// file_extensions:
///   - "rs"
///   - "toml"
/// ignore_patterns:
///   - "**/target/**"
/// thread_count: 4
/// log_level: "info"
/// encoding_mode: "lossy"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Text to look for (case-insensitive). Supplied by the caller, never
    /// read from a config file.
    #[serde(skip)]
    pub query: String,

    /// Root directory to scan
    #[serde(default = "default_root_path")]
    pub root_path: PathBuf,

    /// Optional list of file extensions to include (e.g., ["rs", "toml"]).
    /// If None, every file is scanned.
    #[serde(default)]
    pub file_extensions: Option<Vec<String>>,

    /// Glob patterns for files to skip
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Whether to report statistics only, without the per-file listing
    #[serde(default)]
    pub stats_only: bool,

    /// Number of worker threads.
    /// Defaults to the number of CPU cores if not specified.
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// How undecodable file content is handled
    #[serde(default)]
    pub encoding_mode: EncodingMode,
}

fn default_root_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl ScanConfig {
    /// Creates a configuration with defaults for everything but the query
    /// and root directory
    pub fn new(query: impl Into<String>, root_path: impl Into<PathBuf>) -> Self {
        Self {
            query: query.into(),
            root_path: root_path.into(),
            file_extensions: None,
            ignore_patterns: Vec::new(),
            stats_only: false,
            thread_count: default_thread_count(),
            log_level: default_log_level(),
            encoding_mode: EncodingMode::default(),
        }
    }

    /// Sets the worker thread count
    pub fn with_thread_count(mut self, thread_count: NonZeroUsize) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Restricts the scan to the given file extensions
    pub fn with_file_extensions(mut self, extensions: Vec<String>) -> Self {
        self.file_extensions = Some(extensions);
        self
    }

    /// Sets the encoding mode
    pub fn with_encoding_mode(mut self, encoding_mode: EncodingMode) -> Self {
        self.encoding_mode = encoding_mode;
        self
    }

    /// Loads configuration from the default locations, plus an optional
    /// explicit config file which takes the highest precedence.
    ///
    /// A missing default-location file is simply skipped; a missing explicit
    /// file is an error.
    pub fn load_from(config_path: Option<&Path>) -> ScanResult<Self> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ScanError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }

        let mut builder = ConfigBuilder::builder();

        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("scour/config.yaml")),
            // Local config
            Some(PathBuf::from(".scour.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ScanError::config_error(e.to_string()))
    }

    /// Merges CLI arguments with configuration file values.
    /// CLI values take precedence over config file values.
    pub fn merge_with_cli(mut self, cli_config: ScanConfig) -> Self {
        if !cli_config.query.is_empty() {
            self.query = cli_config.query;
        }
        if cli_config.root_path != default_root_path() {
            self.root_path = cli_config.root_path;
        }
        if cli_config.file_extensions.is_some() {
            self.file_extensions = cli_config.file_extensions;
        }
        if !cli_config.ignore_patterns.is_empty() {
            self.ignore_patterns = cli_config.ignore_patterns;
        }
        if cli_config.stats_only {
            self.stats_only = true;
        }
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        if cli_config.encoding_mode != EncodingMode::default() {
            self.encoding_mode = cli_config.encoding_mode;
        }
        self
    }
}
