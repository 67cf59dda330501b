//! The three append-only run logs: skipped entries, copied files, errors.
//!
//! Every write opens the file in append mode, writes a single line and closes it
//! again. Failures never propagate: a failed skip/copy write is reported to the
//! error log, and a failed error-log write is reported as a console warning.

use chrono::Local;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const SKIP_LOG_NAME: &str = "skip.log";
pub const COPY_LOG_NAME: &str = "phlat.log";
pub const ERROR_LOG_NAME: &str = "errors.log";

/// Why a walked entry did not make it into the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Directory,
    DuplicateHash,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Directory => f.write_str("Object is a directory."),
            SkipReason::DuplicateHash => f.write_str("Duplicate file hash."),
        }
    }
}

/// Locations of the skip, copy and error logs for one run
#[derive(Debug, Clone)]
pub struct RunLog {
    skip_path: PathBuf,
    copy_path: PathBuf,
    error_path: PathBuf,
}

impl RunLog {
    pub fn new(skip_path: PathBuf, copy_path: PathBuf, error_path: PathBuf) -> Self {
        Self {
            skip_path,
            copy_path,
            error_path,
        }
    }

    /// Logs named `skip.log`, `phlat.log` and `errors.log` inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(
            dir.join(SKIP_LOG_NAME),
            dir.join(COPY_LOG_NAME),
            dir.join(ERROR_LOG_NAME),
        )
    }

    pub fn skip_path(&self) -> &Path {
        &self.skip_path
    }

    pub fn copy_path(&self) -> &Path {
        &self.copy_path
    }

    pub fn error_path(&self) -> &Path {
        &self.error_path
    }

    /// Delete all three logs and start each with a timestamp line
    pub fn reset(&self) {
        for path in self.all_paths() {
            // Missing files are expected on a first run.
            let _ = fs::remove_file(path);
        }
        self.stamp();
    }

    /// Append the current timestamp to all three logs
    pub fn stamp(&self) {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S%.f %:z").to_string();
        for path in self.all_paths() {
            if let Err(e) = append_line(path, &now) {
                warn!("Error writing timestamp to {}: {}", path.display(), e);
            }
        }
    }

    /// Record a skipped entry
    pub fn log_skip(&self, path: &Path, reason: SkipReason) {
        let line = format!("File \"{}\" skipped. Reason: {}", path.display(), reason);
        if let Err(e) = append_line(&self.skip_path, &line) {
            self.log_error(&format!("{}: {}", self.skip_path.display(), e));
        }
    }

    /// Record the basename a file was copied to
    pub fn log_copy(&self, dest_name: &str) {
        if let Err(e) = append_line(&self.copy_path, dest_name) {
            self.log_error(&format!("{}: {}", self.copy_path.display(), e));
        }
    }

    /// Record an error's text; falls back to a console warning
    pub fn log_error(&self, err: &dyn fmt::Display) {
        if let Err(e) = append_line(&self.error_path, &err.to_string()) {
            warn!("Error logging to {}: {}", self.error_path.display(), e);
        }
    }

    fn all_paths(&self) -> [&Path; 3] {
        [&self.skip_path, &self.copy_path, &self.error_path]
    }
}

fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}
