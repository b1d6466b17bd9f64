//! Pending-queue store access
//!
//! Reads unenrolled capture logs from the pending-queue store, resolving
//! photo references and keeping only the latest log per smartcard id, and
//! clears the store back to its header once a run completes.

use enroll_common::model::PendingLogEntry;
use enroll_common::{Error, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Header row of the pending-queue store
pub const QUEUE_HEADER: &str = "photo_path,timestamp,id";

/// Read the pending queue and deduplicate by smartcard id.
///
/// Columns are located by header name, so their order in the store is not
/// load-bearing. When the same smartcard id was logged multiple times, only
/// the row appearing last is kept; distinct ids come out in the order they
/// were first seen. Photo references are joined onto `photos_dir` without an
/// existence check.
pub fn read_pending(queue_path: &Path, photos_dir: &Path) -> Result<Vec<PendingLogEntry>> {
    let content = fs::read_to_string(queue_path)?;
    let mut lines = content.lines().enumerate();

    let (_, header) = lines.next().ok_or_else(|| Error::MalformedRow {
        line: 1,
        reason: "store is empty, expected a header row".to_string(),
    })?;
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let index_of = |name: &str| -> Result<usize> {
        columns
            .iter()
            .position(|c| *c == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    };
    let photo_col = index_of("photo_path")?;
    let timestamp_col = index_of("timestamp")?;
    let id_col = index_of("id")?;

    let mut latest: IndexMap<String, PendingLogEntry> = IndexMap::new();
    for (idx, line) in lines {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        let line_no = idx + 1;
        let entry = PendingLogEntry {
            photo_path: photos_dir.join(field(&fields, photo_col, line_no, "photo_path")?),
            timestamp: field(&fields, timestamp_col, line_no, "timestamp")?.to_string(),
            card_id: field(&fields, id_col, line_no, "id")?.to_string(),
        };
        // Last log wins; the id keeps its first-seen position.
        latest.insert(entry.card_id.clone(), entry);
    }

    debug!(entries = latest.len(), "Read pending queue");
    Ok(latest.into_values().collect())
}

fn field<'a>(fields: &[&'a str], col: usize, line: usize, name: &str) -> Result<&'a str> {
    fields.get(col).copied().ok_or_else(|| Error::MalformedRow {
        line,
        reason: format!("missing {name} field"),
    })
}

/// Truncate the pending queue back to its header row.
///
/// Runs unconditionally after a review pass; every row is dropped regardless
/// of its outcome.
pub fn clear_pending(queue_path: &Path) -> Result<()> {
    fs::write(queue_path, format!("{QUEUE_HEADER}\n"))?;
    debug!(path = %queue_path.display(), "Cleared pending queue");
    Ok(())
}
