use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use scour::{
    config::{EncodingMode, ScanConfig},
    report::render,
    scan::scan,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Concurrent, case-insensitive file search
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to search for (case-insensitive)
    query: String,

    /// Root directory to scan
    #[arg(short = 'd', long, default_value = ".")]
    dir: PathBuf,

    /// File extensions to include (e.g. rs,toml); every file by default
    #[arg(short = 'e', long)]
    extensions: Option<String>,

    /// Glob patterns to skip
    #[arg(short, long)]
    ignore: Vec<String>,

    /// Show only statistics, not the matching lines
    #[arg(short, long)]
    stats: bool,

    /// Number of worker threads (default: CPU cores)
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// How to handle invalid UTF-8 (lossy|strict)
    #[arg(long, default_value = "lossy")]
    encoding: String,

    /// Path to a config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.query.is_empty() {
        bail!("the search query must not be empty");
    }

    let file_extensions = cli.extensions.as_ref().map(|e| {
        e.split(',')
            .map(|s| s.trim().to_string())
            .collect::<Vec<_>>()
    });

    let encoding_mode = match cli.encoding.to_lowercase().as_str() {
        "strict" => EncodingMode::Strict,
        _ => EncodingMode::Lossy,
    };

    let mut cli_config = ScanConfig::new(cli.query, cli.dir);
    cli_config.file_extensions = file_extensions;
    cli_config.ignore_patterns = cli.ignore;
    cli_config.stats_only = cli.stats;
    cli_config.encoding_mode = encoding_mode;
    if let Some(level) = cli.log_level {
        cli_config.log_level = level;
    }

    let mut config = ScanConfig::load_from(cli.config.as_deref())?.merge_with_cli(cli_config);
    if let Some(threads) = cli.threads {
        config.thread_count = threads;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_writer(std::io::stderr)
        .init();

    let report = scan(&config)?;
    print!("{}", render(&report, config.stats_only));
    Ok(())
}
