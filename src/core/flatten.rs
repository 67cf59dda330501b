//! Scan-then-copy pipeline

use anyhow::Result;
use indicatif::ProgressBar;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

use super::copier::{copy_unique, CollisionCounter};
use super::target::prepare_output_dir;
use crate::reporting::run_log::RunLog;
use crate::scanner::file_scanner::scan_tree;

/// Counts gathered over one flatten run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenSummary {
    pub directories_skipped: usize,
    pub duplicates_skipped: usize,
    pub files_copied: usize,
    pub files_renamed: usize,
}

/// Printed when the user declines to continue into a non-empty directory
pub const CANCEL_MESSAGE: &str = "Program terminated by user.";

/// How a full run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Cancelled,
    Completed(FlattenSummary),
}

/// Validate `out_dir`, then reset the logs, flatten and stamp the logs again.
///
/// The output directory is checked before anything touches the logs, so a
/// rejected target or a declined prompt leaves the previous run's logs as
/// they were.
///
/// # Arguments
/// * `source` - Tree to flatten
/// * `out_dir` - Output directory, created if missing
/// * `input` - Source of the overwrite confirmation
/// * `prompt` - Receives the confirmation question and the cancel message
/// * `log` - Run logs
/// * `scan_progress` - Spinner for the walk
/// * `copy_progress` - Bar for the copy phase
pub fn run<R: BufRead, W: Write>(
    source: &Path,
    out_dir: &Path,
    input: R,
    mut prompt: W,
    log: &RunLog,
    scan_progress: &ProgressBar,
    copy_progress: &ProgressBar,
) -> Result<RunOutcome> {
    let status = prepare_output_dir(out_dir, input, &mut prompt)?;
    if !status.should_proceed() {
        writeln!(prompt, "{}", CANCEL_MESSAGE)?;
        return Ok(RunOutcome::Cancelled);
    }

    log.reset();
    let summary = flatten(source, out_dir, log, scan_progress, copy_progress)?;
    log.stamp();

    Ok(RunOutcome::Completed(summary))
}

/// Copy one file per distinct content hash from `source` into `out_dir`.
///
/// The first error from the scan or the copy phase stops the run.
///
/// # Arguments
/// * `source` - Tree to flatten
/// * `out_dir` - Validated output directory
/// * `log` - Run logs
/// * `scan_progress` - Spinner for the walk
/// * `copy_progress` - Bar for the copy phase, length set here
pub fn flatten(
    source: &Path,
    out_dir: &Path,
    log: &RunLog,
    scan_progress: &ProgressBar,
    copy_progress: &ProgressBar,
) -> Result<FlattenSummary> {
    let report = scan_tree(source, log, scan_progress)?;
    scan_progress.finish_and_clear();
    info!(
        unique = report.index.len(),
        duplicates = report.duplicates_skipped,
        "scan complete"
    );

    let mut summary = FlattenSummary {
        directories_skipped: report.directories_skipped,
        duplicates_skipped: report.duplicates_skipped,
        ..FlattenSummary::default()
    };

    copy_progress.set_length(report.index.len() as u64);
    let mut counters = CollisionCounter::new();
    for src in report.index.paths() {
        let outcome = copy_unique(src, out_dir, &mut counters, log)?;
        summary.files_copied += 1;
        if outcome.renamed {
            summary.files_renamed += 1;
        }
        copy_progress.inc(1);
    }
    copy_progress.finish_and_clear();

    Ok(summary)
}
