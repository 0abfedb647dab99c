//! Bounded-prefix BLAKE3 fingerprinting of a single file.
//!
//! The digest covers the first `min(header_bytes, size)` bytes of the file
//! (`header_bytes == 0` hashes the whole file). Reading fewer bytes than
//! requested is a hard error, not a silent truncation: a digest over less
//! content than advertised would corrupt every equality decision downstream.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::ScanError;

use super::FileFingerprint;

/// Read buffer size for streaming the prefix into the hasher.
const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the fingerprint of one regular file.
///
/// `declared_size` is the file's size as reported by directory metadata;
/// it becomes the fingerprint's `size` and bounds the digest when
/// `header_bytes` is zero or exceeds it.
///
/// The file handle is scoped to this call and released on every path,
/// success or failure.
///
/// # Errors
///
/// Returns [`ScanError::FileRead`] if the file cannot be opened or ends
/// before the requested prefix has been read (truncated or concurrently
/// modified file).
pub fn fingerprint_file(
    path: &Path,
    declared_size: u64,
    header_bytes: u64,
) -> Result<FileFingerprint, ScanError> {
    let prefix_len = if header_bytes == 0 {
        declared_size
    } else {
        header_bytes.min(declared_size)
    };

    let mut file = File::open(path).map_err(|source| ScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = blake3::Hasher::new();
    let mut buf = [0u8; CHUNK_SIZE];
    let mut remaining = prefix_len;

    while remaining > 0 {
        let want = CHUNK_SIZE.min(usize::try_from(remaining).unwrap_or(CHUNK_SIZE));
        let read = file
            .read(&mut buf[..want])
            .map_err(|source| ScanError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            // The file is shorter than its declared size said it would be.
            return Err(ScanError::FileRead {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    ErrorKind::UnexpectedEof,
                    format!(
                        "expected {prefix_len} bytes for digest, file ended {remaining} bytes early"
                    ),
                ),
            });
        }
        hasher.update(&buf[..read]);
        remaining -= read as u64;
    }

    log::trace!(
        "fingerprinted {} ({} bytes, {} hashed)",
        path.display(),
        declared_size,
        prefix_len
    );

    Ok(FileFingerprint::new(
        path.to_path_buf(),
        declared_size,
        *hasher.finalize().as_bytes(),
    ))
}
