//! Content hashing and the first-seen dedup index

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Raw SHA-256 digest used as the dedup key
pub type FileDigest = [u8; 32];

/// Compute the SHA-256 digest of a file's full contents
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// The 32 raw digest bytes
pub fn compute_file_hash(path: &Path) -> Result<FileDigest> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().into())
}

/// Lowercase hex rendering of a digest, for diagnostics
pub fn digest_hex(digest: &FileDigest) -> String {
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Keeps the first path that produced each digest.
///
/// Paths are kept in insertion order so the copy phase replays the walk order.
#[derive(Debug, Default)]
pub struct DedupIndex {
    seen: HashSet<FileDigest>,
    paths: Vec<PathBuf>,
}

impl DedupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` under `digest` unless the digest is already known.
    ///
    /// Returns `true` when the path was kept, `false` when it is a duplicate.
    pub fn insert(&mut self, digest: FileDigest, path: PathBuf) -> bool {
        if self.contains(&digest) {
            return false;
        }
        self.seen.insert(digest);
        self.paths.push(path);
        true
    }

    pub fn contains(&self, digest: &FileDigest) -> bool {
        self.seen.contains(digest)
    }

    /// Surviving paths in first-seen order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
