//! Console presentation for the review loop
//!
//! Stands in for the operator form: shows the photo location, timestamp and
//! smartcard id, then reads one line for the NRIC. The discard command or
//! end-of-input discards the entry; any other line, empty included, is a
//! submission.

use enroll_common::model::PendingLogEntry;
use enroll_common::Result;
use std::io::{BufRead, Write};
use tracing::warn;

use crate::review::{ReviewOutcome, ReviewPrompt};

/// Line command that discards the current entry without submitting
pub const DISCARD_COMMAND: &str = ":discard";

/// Interactive prompt over arbitrary input/output streams
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ReviewPrompt for ConsolePrompt<R, W> {
    fn review(&mut self, entry: &PendingLogEntry) -> Result<ReviewOutcome> {
        writeln!(self.output)?;
        if entry.photo_path.is_file() {
            writeln!(self.output, "Photo: {}", entry.photo_path.display())?;
        } else {
            // An unresolvable photo degrades the presentation only; the
            // entry can still be submitted or discarded.
            warn!(photo = %entry.photo_path.display(), "Photo not found");
            writeln!(self.output, "Photo: {} (not found)", entry.photo_path.display())?;
        }
        writeln!(self.output, "Timestamp: {}", entry.timestamp)?;
        writeln!(self.output, "Smartcard ID: {}", entry.card_id)?;
        write!(
            self.output,
            "Input employee's NRIC ({DISCARD_COMMAND} to discard): "
        )?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            // Input closed mid-review; same as a discard.
            return Ok(ReviewOutcome::Discarded);
        }
        let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
        if line == DISCARD_COMMAND {
            Ok(ReviewOutcome::Discarded)
        } else {
            Ok(ReviewOutcome::Submitted(line.to_string()))
        }
    }
}
