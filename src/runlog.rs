use std::fs::OpenOptions;
use std::io::Write;

use chrono::Local;

/// Milestone log for a pipeline run.  One line per event,
/// `<timestamp>, <LEVEL>, <message>`, appended to a plain text file.
/// The file is opened per call; no handle is held between events.
pub struct RunLog {
    path: String,
}

impl RunLog {
    pub fn new(path: &str) -> RunLog {
        RunLog {
            path: path.to_string(),
        }
    }

    pub fn info(&self, message: &str) -> Result<(), std::io::Error> {
        self.append("INFO", message)
    }

    pub fn error(&self, message: &str) -> Result<(), std::io::Error> {
        self.append("ERROR", message)
    }

    fn append(&self, level: &str, message: &str) -> Result<(), std::io::Error> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}, {}, {}", timestamp, level, message)
    }
}
