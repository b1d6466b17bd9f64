//! # Enroll Common Library
//!
//! Shared code for the batch enrollment tools including:
//! - Error types
//! - Path configuration loading
//! - Pending-log and enrollment-record models
//! - The per-run log sink

pub mod config;
pub mod error;
pub mod model;
pub mod runlog;

pub use error::{Error, Result};
pub use runlog::RunLog;
