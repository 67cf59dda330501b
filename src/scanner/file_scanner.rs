//! Source tree walking

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use super::duplicate_detector::{compute_file_hash, digest_hex, DedupIndex};
use crate::reporting::run_log::{RunLog, SkipReason};

/// Outcome of walking the source tree
#[derive(Debug, Default)]
pub struct ScanReport {
    pub index: DedupIndex,
    pub directories_skipped: usize,
    pub duplicates_skipped: usize,
}

/// Walk `root` and keep the first file seen for every distinct content hash.
///
/// Directories (the root included) and duplicate files are written to the skip
/// log. A traversal or read error aborts the whole scan.
///
/// # Arguments
/// * `root` - Source directory to walk
/// * `log` - Run logs receiving skip entries
/// * `progress` - Spinner advanced once per entry
pub fn scan_tree(root: &Path, log: &RunLog, progress: &ProgressBar) -> Result<ScanReport> {
    let mut report = ScanReport::default();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let path = entry.path();
        progress.inc(1);

        if entry.file_type().is_dir() {
            debug!(path = %path.display(), "skipping directory");
            log.log_skip(path, SkipReason::Directory);
            report.directories_skipped += 1;
            continue;
        }

        let digest = compute_file_hash(path)?;
        if report.index.insert(digest, path.to_path_buf()) {
            debug!(path = %path.display(), hash = %digest_hex(&digest), "unique file");
        } else {
            debug!(path = %path.display(), hash = %digest_hex(&digest), "duplicate file");
            log.log_skip(path, SkipReason::DuplicateHash);
            report.duplicates_skipped += 1;
        }
    }

    Ok(report)
}
