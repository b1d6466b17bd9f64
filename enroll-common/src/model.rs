//! Data model for pending capture logs and confirmed enrollment records

use std::path::PathBuf;

/// One not-yet-enrolled capture awaiting operator review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLogEntry {
    /// Photo location, already resolved against the photo base directory.
    /// Existence is not checked until the entry is presented.
    pub photo_path: PathBuf,
    /// Capture timestamp, preserved verbatim from the store
    pub timestamp: String,
    /// Smartcard id; the deduplication key within one read pass
    pub card_id: String,
}

/// One confirmed (NRIC, smartcard id) association
///
/// Records are append-only. A re-enrolled smartcard produces a second row
/// rather than replacing the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRecord {
    /// Operator-supplied national identifier; not validated, may be empty
    pub nric: String,
    /// Smartcard id the identifier was matched to
    pub card_id: String,
}
