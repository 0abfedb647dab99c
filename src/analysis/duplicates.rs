//! Intra-tree duplicate grouping.
//!
//! A single pass assigns each fingerprint to a bucket keyed by its content
//! identity (digest plus size, the same pair `same_content` compares).
//! Only buckets with two or more members are duplicates; singletons are
//! dropped from the report but still count toward the scanned total.

use std::collections::HashMap;

use crate::scanner::{digest_to_hex, Digest, FileFingerprint};

/// A set of content-equal fingerprints within one scanned tree.
///
/// Always has at least two members when produced by [`group_duplicates`].
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    /// Digest shared by every member
    pub digest: Digest,
    /// Size in bytes shared by every member
    pub size: u64,
    /// The content-equal files
    pub files: Vec<FileFingerprint>,
}

impl DuplicateGroup {
    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Bytes that deleting all but one member would reclaim.
    ///
    /// All members share `size`, so the choice of keeper does not affect
    /// the total.
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        self.size * (self.files.len() as u64).saturating_sub(1)
    }

    /// Digest as a lowercase hex string.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        digest_to_hex(&self.digest)
    }
}

/// Aggregate statistics from one grouping pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateStats {
    /// Total fingerprints examined, including singletons
    pub files_scanned: usize,
    /// Sum of member counts across all qualifying groups
    pub duplicate_files: usize,
    /// Total reclaimable bytes if each group kept a single copy
    pub wasted_bytes: u64,
}

/// Partition fingerprints into duplicate groups.
///
/// Returns only groups with two or more members, sorted by digest for
/// stable enumeration, together with aggregate statistics. An empty input
/// yields zero groups and zero-valued statistics.
#[must_use]
pub fn group_duplicates(files: &[FileFingerprint]) -> (Vec<DuplicateGroup>, DuplicateStats) {
    let mut buckets: HashMap<(Digest, u64), Vec<FileFingerprint>> = HashMap::new();
    for file in files {
        buckets
            .entry((file.digest, file.size))
            .or_default()
            .push(file.clone());
    }

    let mut stats = DuplicateStats {
        files_scanned: files.len(),
        ..Default::default()
    };

    let mut groups: Vec<DuplicateGroup> = buckets
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|((digest, size), members)| {
            stats.duplicate_files += members.len();
            stats.wasted_bytes += size * (members.len() as u64 - 1);
            DuplicateGroup {
                digest,
                size,
                files: members,
            }
        })
        .collect();

    // HashMap iteration order varies; sort for a stable report.
    groups.sort_by(|a, b| a.digest.cmp(&b.digest).then(a.size.cmp(&b.size)));

    log::debug!(
        "grouped {} files into {} duplicate groups ({} bytes wasted)",
        stats.files_scanned,
        groups.len(),
        stats.wasted_bytes
    );

    (groups, stats)
}
