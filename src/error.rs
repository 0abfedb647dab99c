//! Error taxonomy for the fingerprinting engine.
//!
//! Every error raised during walking or fingerprinting is fatal: the engine
//! performs no retries and has no partial-success mode. A report derived
//! from an incompletely scanned tree would silently under-report duplicates,
//! so the first error aborts the whole run and propagates to the caller.

use std::path::PathBuf;

/// Errors that can occur while resolving roots, walking trees, or
/// fingerprinting files.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// A supplied root could not be resolved to an absolute path.
    /// Raised before any scanning starts.
    #[error("cannot resolve path {path}: {source}")]
    PathResolution {
        /// The path as supplied on the command line
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be listed (permissions, missing, not a
    /// directory). Aborts the walk; no partial tree is reported.
    #[error("cannot read directory {path}: {source}")]
    DirectoryRead {
        /// Directory that failed to list
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file could not be opened, or fewer bytes than required for its
    /// digest were available. Aborts the walk.
    #[error("cannot read file {path}: {source}")]
    FileRead {
        /// File that failed to read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
