//! Records store access
//!
//! Appends confirmed (NRIC, smartcard id) associations to the records
//! store, completing an enrollment.

use enroll_common::model::EnrollmentRecord;
use enroll_common::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Append one confirmed association to the records store.
///
/// No check is made for an existing association with the same smartcard id;
/// re-enrollment appends a second row. Latest-wins applies only when the
/// pending queue is read, never here.
pub fn append_record(records_path: &Path, record: &EnrollmentRecord) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(records_path)?;
    writeln!(file, "{},{}", record.nric, record.card_id)?;
    file.flush()?;
    debug!(card_id = %record.card_id, "Appended enrollment record");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use enroll_common::Error;
    use std::fs;
    use tempfile::TempDir;

    fn record(nric: &str, card_id: &str) -> EnrollmentRecord {
        EnrollmentRecord {
            nric: nric.to_string(),
            card_id: card_id.to_string(),
        }
    }

    #[test]
    fn test_append_creates_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("persons.txt");

        append_record(&path, &record("S1234567A", "C100")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "S1234567A,C100\n");
    }

    #[test]
    fn test_append_adds_exactly_one_row() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("persons.txt");
        fs::write(&path, "S0000001B,C050\n").unwrap();

        append_record(&path, &record("S1234567A", "C100")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "S0000001B,C050\nS1234567A,C100\n");
    }

    #[test]
    fn test_reenrollment_appends_duplicate_row() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("persons.txt");

        append_record(&path, &record("S1234567A", "C100")).unwrap();
        append_record(&path, &record("S7654321Z", "C100")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert_eq!(content, "S1234567A,C100\nS7654321Z,C100\n");
    }

    #[test]
    fn test_empty_nric_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("persons.txt");

        append_record(&path, &record("", "C100")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), ",C100\n");
    }

    #[test]
    fn test_unwritable_store_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened for append.
        let result = append_record(temp_dir.path(), &record("S1234567A", "C100"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
