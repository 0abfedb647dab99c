//! Fail-fast recursive tree walking.
//!
//! Enumeration is depth-first with siblings sorted by file name, so the
//! resulting set is stable within one run. The first error encountered
//! (unlistable directory, unreadable file, short read) aborts the entire
//! walk and is returned to the caller; there is no skip-and-continue mode,
//! because matching over an incompletely scanned tree would silently
//! under-report duplicates.
//!
//! Fingerprinting the enumerated files is independent per file and fans out
//! across the rayon pool. Result collection short-circuits on the first
//! error, so the fail-fast contract holds for the parallel phase too, and
//! no partial fingerprint set is ever observable.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::ScanError;

use super::{fingerprint_file, FileFingerprint};

/// Walk `root` and fingerprint every regular file reachable from it.
///
/// `header_bytes` bounds how much of each file is digested; zero means the
/// whole file. Directories themselves are not represented in the result.
///
/// # Errors
///
/// Returns the first [`ScanError`] encountered; on error no partial result
/// is produced.
pub fn walk_tree(root: &Path, header_bytes: u64) -> Result<Vec<FileFingerprint>, ScanError> {
    let pending = enumerate_files(root)?;
    log::debug!(
        "enumerated {} files under {}",
        pending.len(),
        root.display()
    );

    let fingerprints = pending
        .par_iter()
        .map(|(path, size)| fingerprint_file(path, *size, header_bytes))
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "fingerprinted {} files under {} (header bytes: {})",
        fingerprints.len(),
        root.display(),
        header_bytes
    );
    Ok(fingerprints)
}

/// Enumerate every non-directory entry under `root`, depth-first with
/// sorted siblings, collecting path and metadata size.
fn enumerate_files(root: &Path) -> Result<Vec<(PathBuf, u64)>, ScanError> {
    // `min_depth(1)` yields nothing for a non-directory root instead of
    // failing, which would turn a bad root into an empty success report.
    let root_metadata = fs::metadata(root).map_err(|source| ScanError::DirectoryRead {
        path: root.to_path_buf(),
        source,
    })?;
    if !root_metadata.is_dir() {
        return Err(ScanError::DirectoryRead {
            path: root.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        });
    }

    let mut pending = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| into_scan_error(root, err))?;
        if entry.file_type().is_dir() {
            continue;
        }
        let metadata = entry.metadata().map_err(|err| {
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("metadata unavailable"));
            ScanError::FileRead {
                path: entry.path().to_path_buf(),
                source,
            }
        })?;
        pending.push((entry.into_path(), metadata.len()));
    }

    Ok(pending)
}

/// Convert a walkdir error into the engine's taxonomy.
fn into_scan_error(root: &Path, err: walkdir::Error) -> ScanError {
    let path = err
        .path()
        .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("directory traversal failed"));
    ScanError::DirectoryRead { path, source }
}
