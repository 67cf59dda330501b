//! Directory Flattening Library
//!
//! Copies every content-unique file of a directory tree into one flat output
//! directory, renaming on name collisions and logging what was skipped.

pub mod cli;
pub mod core;
pub mod logging;
pub mod reporting;
pub mod scanner;

pub use crate::core::flatten;
pub use crate::reporting::run_log;
pub use crate::scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::cli::{Cli, USAGE_WARNING};
    pub use crate::core::copier::{collision_name, copy_unique, CollisionCounter, CopyOutcome};
    pub use crate::core::flatten::{flatten, run, FlattenSummary, RunOutcome, CANCEL_MESSAGE};
    pub use crate::core::target::{
        confirm_overwrite, prepare_output_dir, TargetStatus, OVERWRITE_PROMPT,
    };
    pub use crate::reporting::run_log::{RunLog, SkipReason};
    pub use crate::scanner::duplicate_detector::{
        compute_file_hash, digest_hex, DedupIndex, FileDigest,
    };
    pub use crate::scanner::file_scanner::{scan_tree, ScanReport};
}
