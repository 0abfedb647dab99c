//! Scanner module: file fingerprints and tree walking.
//!
//! A [`FileFingerprint`] is the identity record for one regular file:
//! its path, its total size, and a BLAKE3 digest over a bounded prefix of
//! its content. Two fingerprints with equal digest and equal size are
//! treated as content-equal; when the configured header size is smaller
//! than the file, this is a deliberate accuracy/speed trade-off and a
//! documented false-positive risk, not a bug.
//!
//! Submodules:
//! - [`fingerprint`]: bounded-prefix digesting of a single file
//! - [`walker`]: fail-fast recursive enumeration of a directory tree
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::walk_tree;
//! use std::path::Path;
//!
//! let files = walk_tree(Path::new("/home/user/photos"), 1024)?;
//! println!("fingerprinted {} files", files.len());
//! # Ok::<(), dupescan::error::ScanError>(())
//! ```

pub mod fingerprint;
pub mod walker;

use std::path::PathBuf;

pub use fingerprint::fingerprint_file;
pub use walker::walk_tree;

/// Fixed-length BLAKE3 content digest (32 bytes).
pub type Digest = [u8; 32];

/// Identity record for one file: path, size, and bounded-prefix digest.
///
/// Created once per file during a walk, never mutated, discarded after the
/// run. The digest is a pure function of the first `min(header_bytes, size)`
/// bytes of content at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFingerprint {
    /// Absolute path to the file
    pub path: PathBuf,
    /// Total file size in bytes at scan time
    pub size: u64,
    /// Digest over the file's leading bytes
    pub digest: Digest,
}

impl FileFingerprint {
    /// Create a new fingerprint.
    #[must_use]
    pub fn new(path: PathBuf, size: u64, digest: Digest) -> Self {
        Self { path, size, digest }
    }

    /// Whether two fingerprints represent the same content.
    ///
    /// True iff both the digest and the size match. Both conditions are
    /// required: with a truncated header, two files with identical leading
    /// bytes but different total lengths share a digest and must not be
    /// declared identical.
    #[must_use]
    pub fn same_content(&self, other: &FileFingerprint) -> bool {
        self.digest == other.digest && self.size == other.size
    }

    /// The digest as a lowercase hex string.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        digest_to_hex(&self.digest)
    }
}

/// Render a digest as a lowercase hex string.
#[must_use]
pub fn digest_to_hex(digest: &Digest) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
