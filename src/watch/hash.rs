// src/watch/hash.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use blake3::Hasher;
use tracing::debug;

/// Compute the hash of a single file.
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let mut hasher = Hasher::new();
    let mut file = File::open(path)
        .with_context(|| format!("opening file for hashing: {:?}", path))?;
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().to_hex().to_string())
}

/// Remembers the content hash of the snapshot file so that editor saves
/// that do not change anything (or duplicate notify events) are ignored.
#[derive(Debug, Default)]
pub struct ContentTracker {
    last: Option<String>,
}

impl ContentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash `path` and report whether its content differs from the last
    /// call. The first call always reports a change.
    pub fn changed(&mut self, path: &Path) -> Result<bool> {
        let hash = compute_file_hash(path)?;
        if self.last.as_deref() == Some(hash.as_str()) {
            debug!(?path, "snapshot content unchanged");
            return Ok(false);
        }
        debug!(?path, hash = %hash, "snapshot content changed");
        self.last = Some(hash);
        Ok(true)
    }

    /// Forget the last hash, e.g. after the file was removed.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
