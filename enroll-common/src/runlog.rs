//! Per-run log sink
//!
//! The run log records the durable trail of one run: start, read success,
//! per-entry outcomes, queue-clear confirmation, end. It is an explicitly
//! constructed instance handed to the driver rather than process-global
//! state, so the workflow can be exercised in tests against an in-memory
//! buffer. The destination file is truncated at the start of every run.

use chrono::Local;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Timestamp format of each log line, e.g. `07/03/2026 09:41:02 PM`
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %I:%M:%S %p";

/// Line-oriented log sink for one run
pub struct RunLog {
    sink: Box<dyn Write>,
}

impl RunLog {
    /// Open `path` for writing, truncating any previous run's log.
    pub fn create(path: &Path) -> io::Result<RunLog> {
        let file = File::create(path)?;
        Ok(RunLog::new(file))
    }

    /// Wrap an arbitrary sink. Tests pass an in-memory buffer.
    pub fn new(sink: impl Write + 'static) -> RunLog {
        RunLog {
            sink: Box::new(sink),
        }
    }

    pub fn info(&mut self, message: &str) {
        self.write("INFO", message);
    }

    pub fn warn(&mut self, message: &str) {
        self.write("WARNING", message);
    }

    pub fn debug(&mut self, message: &str) {
        self.write("DEBUG", message);
    }

    fn write(&mut self, level: &str, message: &str) {
        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        // A failed log write never aborts the run; the stores are the
        // source of truth.
        let _ = writeln!(self.sink, "{stamp} {level} {message}");
        let _ = self.sink.flush();
    }
}
