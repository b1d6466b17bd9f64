//! Review loop
//!
//! Presents each deduplicated pending log exactly once, in order, and acts
//! on the operator's decision. Presentation sits behind the [`ReviewPrompt`]
//! trait so the loop runs headless in tests.

use enroll_common::model::{EnrollmentRecord, PendingLogEntry};
use enroll_common::{Result, RunLog};
use std::path::Path;
use tracing::info;

use crate::records;

/// Operator decision for one pending log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// NRIC as typed, unvalidated; an empty string is accepted
    Submitted(String),
    /// Explicit discard, or the presentation was closed without submitting
    Discarded,
}

/// Per-entry synchronous presentation contract.
///
/// `review` blocks until the operator resolves the entry. It is called
/// exactly once per entry; a resolved entry is never revisited.
pub trait ReviewPrompt {
    fn review(&mut self, entry: &PendingLogEntry) -> Result<ReviewOutcome>;
}

/// Outcome counts for one review pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReviewStats {
    pub presented: usize,
    pub submitted: usize,
    pub discarded: usize,
}

/// Process every pending entry strictly in order, appending a record for
/// each submission.
///
/// A record-store write failure is fatal to the run; no outcome is ever
/// converted into a recorded skip.
pub fn run_review(
    entries: &[PendingLogEntry],
    records_path: &Path,
    prompt: &mut dyn ReviewPrompt,
    run_log: &mut RunLog,
) -> Result<ReviewStats> {
    let mut stats = ReviewStats::default();

    if entries.is_empty() {
        info!("No pending entries to review");
        run_log.info("No unenrolled persons found.");
        return Ok(stats);
    }

    for entry in entries {
        stats.presented += 1;
        match prompt.review(entry)? {
            ReviewOutcome::Submitted(nric) => {
                run_log.info(&format!(
                    "Inserting NRIC ({}) and corresponding smartcard ID ({}) into the records store...",
                    nric, entry.card_id
                ));
                records::append_record(
                    records_path,
                    &EnrollmentRecord {
                        nric,
                        card_id: entry.card_id.clone(),
                    },
                )?;
                run_log.info("Success!");
                stats.submitted += 1;
            }
            ReviewOutcome::Discarded => {
                run_log.info(&format!(
                    "Discarded log with smartcard ID {}; no NRIC submission",
                    entry.card_id
                ));
                stats.discarded += 1;
            }
        }
    }

    run_log.info("All unenrolled persons' details iterated.");
    Ok(stats)
}
