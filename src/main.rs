use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::Path;
use tracing::info;

use phlat_rs::logging::init_tracing;
use phlat_rs::prelude::*;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if let Some(warning) = cli.extra_args_warning() {
        println!("{}", warning);
    }

    let scan_progress = ProgressBar::new_spinner();
    scan_progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] scanning {pos} entries")?,
    );

    let copy_progress = ProgressBar::new(0);
    copy_progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")?
            .progress_chars("#>-"),
    );

    let log = RunLog::in_dir(Path::new("."));
    let outcome = run(
        &cli.source,
        &cli.output,
        io::stdin().lock(),
        io::stdout(),
        &log,
        &scan_progress,
        &copy_progress,
    )?;

    if let RunOutcome::Completed(summary) = outcome {
        info!(
            copied = summary.files_copied,
            renamed = summary.files_renamed,
            duplicates = summary.duplicates_skipped,
            directories = summary.directories_skipped,
            "flatten complete"
        );
    }

    Ok(())
}
