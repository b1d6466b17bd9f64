//! Path configuration for the enrollment stores
//!
//! Base directories come from a TOML file with built-in defaults. The
//! config file itself is found in priority order:
//! 1. Command-line argument (highest priority)
//! 2. `ENROLL_CONFIG` environment variable (applied by the CLI layer)
//! 3. User config directory (`enroll/config.toml`)
//! 4. Built-in defaults (no file read)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Pending-queue store file name within `unenrolled_dir`
pub const PENDING_QUEUE_FILE: &str = "enrollment.txt";
/// Records store file name within `records_dir`
pub const RECORDS_FILE: &str = "persons.txt";
/// Default run-log file name, relative to the working directory
pub const RUN_LOG_FILE: &str = "logs.txt";

/// Base locations loaded from `config.toml`
///
/// Every field has a built-in default, so a partial or absent file is fine.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    /// Directory holding the pending-queue store
    #[serde(default = "default_unenrolled_dir")]
    pub unenrolled_dir: PathBuf,

    /// Base directory capture photos are resolved against
    #[serde(default = "default_photos_dir")]
    pub photos_dir: PathBuf,

    /// Directory holding the records store
    #[serde(default = "default_records_dir")]
    pub records_dir: PathBuf,

    /// Run-log destination
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            unenrolled_dir: default_unenrolled_dir(),
            photos_dir: default_photos_dir(),
            records_dir: default_records_dir(),
            log_file: default_log_file(),
        }
    }
}

fn default_base_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("enroll"))
        .unwrap_or_else(|| PathBuf::from("./enroll_data"))
}

fn default_unenrolled_dir() -> PathBuf {
    default_base_dir().join("unenrolled")
}

fn default_photos_dir() -> PathBuf {
    default_base_dir().join("photos")
}

fn default_records_dir() -> PathBuf {
    default_base_dir().join("records")
}

fn default_log_file() -> PathBuf {
    PathBuf::from(RUN_LOG_FILE)
}

/// Load configuration following the priority order in the module header.
///
/// An explicitly requested file that is missing or malformed is a hard
/// error; an absent file at the default location just yields the defaults.
pub fn load(explicit: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        return parse(&content, path);
    }

    if let Some(path) = default_config_file() {
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
            return parse(&content, &path);
        }
    }

    tracing::debug!("No config file found, using built-in defaults");
    Ok(TomlConfig::default())
}

fn parse(content: &str, path: &Path) -> Result<TomlConfig> {
    toml::from_str(content)
        .map_err(|e| Error::Config(format!("invalid config {}: {}", path.display(), e)))
}

/// Default config file location (`<config dir>/enroll/config.toml`)
fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("enroll").join("config.toml"))
}

/// Store and log locations one run operates on, with the fixed file names
/// joined onto the configured base directories
#[derive(Debug, Clone)]
pub struct Paths {
    pub pending_queue: PathBuf,
    pub photos_dir: PathBuf,
    pub records_store: PathBuf,
    pub run_log: PathBuf,
}

impl Paths {
    pub fn resolve(config: &TomlConfig) -> Paths {
        Paths {
            pending_queue: config.unenrolled_dir.join(PENDING_QUEUE_FILE),
            photos_dir: config.photos_dir.clone(),
            records_store: config.records_dir.join(RECORDS_FILE),
            run_log: config.log_file.clone(),
        }
    }
}
