//! Source tree scanning and content deduplication

pub mod file_scanner;
pub mod duplicate_detector;

pub use file_scanner::{scan_tree, ScanReport};
pub use duplicate_detector::{compute_file_hash, digest_hex, DedupIndex, FileDigest};
