//! Flat copy into the output directory with collision renaming

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::reporting::run_log::RunLog;

/// Per-basename collision counters for one copy phase
#[derive(Debug, Default)]
pub struct CollisionCounter {
    counts: HashMap<OsString, u32>,
}

impl CollisionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the counter for `name`, starting at 1, and return the new value
    pub fn bump(&mut self, name: &OsStr) -> u32 {
        let count = self.counts.entry(name.to_os_string()).or_insert(0);
        *count += 1;
        *count
    }

    #[cfg(test)]
    pub fn get(&self, name: &OsStr) -> Option<u32> {
        self.counts.get(name).copied()
    }
}

/// Insert `(counter)` before the extension: `report.txt` -> `report(1).txt`.
///
/// The extension starts at the last `.` of the name, so a dotfile such as
/// `.bashrc` becomes `(1).bashrc`. Names without a `.` get the suffix at the
/// end, as do names that are not valid UTF-8.
pub fn collision_name(file_name: &OsStr, counter: u32) -> OsString {
    let suffix = format!("({})", counter);
    match file_name.to_str() {
        Some(name) => {
            let split = name.rfind('.').unwrap_or(name.len());
            let (stem, ext) = name.split_at(split);
            OsString::from(format!("{}{}{}", stem, suffix, ext))
        }
        None => {
            let mut name = file_name.to_os_string();
            name.push(&suffix);
            name
        }
    }
}

/// Where a single copy landed
#[derive(Debug, Clone)]
pub struct CopyOutcome {
    pub destination: PathBuf,
    pub renamed: bool,
}

/// Copy `src` directly under `out_dir`, renaming on a basename collision.
///
/// Only the plain candidate name is checked for existence; the renamed
/// candidate is written without a check, so an existing `name(1).ext` in the
/// output directory is overwritten by the first collision on `name.ext`.
///
/// # Arguments
/// * `src` - Source file
/// * `out_dir` - Flat output directory
/// * `counters` - Collision counters shared across the copy phase
/// * `log` - Run logs receiving the destination basename
pub fn copy_unique(
    src: &Path,
    out_dir: &Path,
    counters: &mut CollisionCounter,
    log: &RunLog,
) -> Result<CopyOutcome> {
    let file_name = src
        .file_name()
        .ok_or_else(|| anyhow!("Source path has no file name: {}", src.display()))?;

    let mut destination = out_dir.join(file_name);
    let mut renamed = false;
    let taken = match destination.symlink_metadata() {
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        _ => true,
    };
    if taken {
        let counter = counters.bump(file_name);
        destination = out_dir.join(collision_name(file_name, counter));
        renamed = true;
        debug!(
            src = %src.display(),
            dest = %destination.display(),
            "name collision, renaming"
        );
    }

    fs::copy(src, &destination).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            src.display(),
            destination.display()
        )
    })?;

    if let Some(dest_name) = destination.file_name() {
        log.log_copy(&dest_name.to_string_lossy());
    }

    Ok(CopyOutcome {
        destination,
        renamed,
    })
}
