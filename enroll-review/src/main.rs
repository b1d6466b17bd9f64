//! enroll-review - batch enrollment review tool
//!
//! Walks an administrator through the queued unenrolled captures one at a
//! time on the console, records each confirmed NRIC/smartcard pairing into
//! the records store, and drains the pending queue.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enroll_common::{config, RunLog};
use enroll_review::console::ConsolePrompt;
use enroll_review::driver::Driver;

/// Command-line arguments for enroll-review
#[derive(Parser, Debug)]
#[command(name = "enroll-review")]
#[command(about = "Review queued unenrolled captures and complete their enrollment records")]
#[command(version)]
struct Args {
    /// Configuration file holding the store base directories
    #[arg(short, long, env = "ENROLL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the directory holding the pending-queue store
    #[arg(long, env = "ENROLL_UNENROLLED_DIR")]
    unenrolled_dir: Option<PathBuf>,

    /// Override the photo base directory
    #[arg(long, env = "ENROLL_PHOTOS_DIR")]
    photos_dir: Option<PathBuf>,

    /// Override the directory holding the records store
    #[arg(long, env = "ENROLL_RECORDS_DIR")]
    records_dir: Option<PathBuf>,

    /// Override the run-log destination
    #[arg(long, env = "ENROLL_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Console diagnostics go to stderr; the run log is separate.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enroll_review=info,enroll_common=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    info!("Starting enroll-review");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config =
        config::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = args.unenrolled_dir {
        config.unenrolled_dir = dir;
    }
    if let Some(dir) = args.photos_dir {
        config.photos_dir = dir;
    }
    if let Some(dir) = args.records_dir {
        config.records_dir = dir;
    }
    if let Some(file) = args.log_file {
        config.log_file = file;
    }

    let paths = config::Paths::resolve(&config);
    info!("Pending queue: {}", paths.pending_queue.display());
    info!("Photo directory: {}", paths.photos_dir.display());
    info!("Records store: {}", paths.records_store.display());

    let run_log = RunLog::create(&paths.run_log)
        .with_context(|| format!("Failed to open run log {}", paths.run_log.display()))?;

    let stdin = io::stdin();
    let mut prompt = ConsolePrompt::new(stdin.lock(), io::stdout());

    let stats = Driver::new(paths, run_log)
        .run(&mut prompt)
        .context("Enrollment review run failed")?;

    info!(
        presented = stats.presented,
        submitted = stats.submitted,
        discarded = stats.discarded,
        "Run complete"
    );

    Ok(())
}
