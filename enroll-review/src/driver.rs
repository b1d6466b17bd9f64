//! Run driver
//!
//! Sequences one full pass: read the pending queue, review every entry,
//! then drain the queue. The drain is unconditional and happens exactly
//! once per completed run; an interruption mid-review leaves the queue
//! intact, so unresolved entries are re-presented on the next run.

use enroll_common::config::Paths;
use enroll_common::{Result, RunLog};
use tracing::info;

use crate::queue;
use crate::review::{self, ReviewPrompt, ReviewStats};

/// One enrollment review run over the configured stores
pub struct Driver {
    paths: Paths,
    run_log: RunLog,
}

impl Driver {
    pub fn new(paths: Paths, run_log: RunLog) -> Self {
        Self { paths, run_log }
    }

    /// Execute one complete run and return the outcome counts.
    pub fn run(mut self, prompt: &mut dyn ReviewPrompt) -> Result<ReviewStats> {
        self.run_log.info("Program running...");
        self.run_log.debug(&format!(
            "pending queue: {} | photos: {} | records store: {}",
            self.paths.pending_queue.display(),
            self.paths.photos_dir.display(),
            self.paths.records_store.display(),
        ));

        let entries = queue::read_pending(&self.paths.pending_queue, &self.paths.photos_dir)?;
        self.run_log.info("Successfully read unenrolled data.");
        info!(entries = entries.len(), "Pending queue read");

        let stats = review::run_review(
            &entries,
            &self.paths.records_store,
            prompt,
            &mut self.run_log,
        )?;

        queue::clear_pending(&self.paths.pending_queue)?;
        self.run_log.info("Cleared the pending queue.");

        self.run_log.info("Closing program...");
        Ok(stats)
    }
}
