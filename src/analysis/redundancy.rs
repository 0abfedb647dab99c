//! Cross-tree redundancy detection.
//!
//! A source file is redundant when some file in the target tree has the
//! same content; deleting it from the source loses nothing. The target set
//! is indexed by digest once (immutable after construction), then each
//! source fingerprint is checked only against its digest bucket, taking the
//! first match in target enumeration order. This preserves the semantics of
//! a naive pairwise scan while staying near-linear in the common case.
//!
//! The search is deliberately asymmetric: reclaimable bytes are always
//! measured on the source side, the side proposed for deletion.

use std::collections::HashMap;

use crate::scanner::{Digest, FileFingerprint};

/// One redundant source file paired with the target file that proves it.
///
/// Ties among several content-equal target files are not distinguished;
/// any single witness is sufficient.
#[derive(Debug, Clone)]
pub struct RedundancyMatch {
    /// The source-tree file proposed for deletion
    pub source: FileFingerprint,
    /// The first content-equal target-tree file found
    pub target: FileFingerprint,
}

/// Aggregate statistics from one redundancy search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedundancyStats {
    /// Files fingerprinted in the source tree
    pub source_files: usize,
    /// Files fingerprinted in the target tree
    pub target_files: usize,
    /// Number of redundant source files
    pub removable_count: usize,
    /// Sum of the matched SOURCE files' sizes
    pub reclaimable_bytes: u64,
}

/// Find every source fingerprint with a content-equal file in `target`.
///
/// Matches are returned in source enumeration order. A source file with no
/// match is simply absent from the result; that is not an error. Duplicates
/// within `target` itself are irrelevant, one witness suffices.
#[must_use]
pub fn find_redundant(
    source: &[FileFingerprint],
    target: &[FileFingerprint],
) -> (Vec<RedundancyMatch>, RedundancyStats) {
    let mut index: HashMap<Digest, Vec<&FileFingerprint>> = HashMap::new();
    for file in target {
        index.entry(file.digest).or_default().push(file);
    }

    let mut matches = Vec::new();
    let mut reclaimable_bytes = 0u64;

    for file in source {
        let witness = index
            .get(&file.digest)
            .and_then(|bucket| bucket.iter().find(|t| file.same_content(t)));
        if let Some(found) = witness {
            reclaimable_bytes += file.size;
            matches.push(RedundancyMatch {
                source: file.clone(),
                target: (*found).clone(),
            });
        }
    }

    let stats = RedundancyStats {
        source_files: source.len(),
        target_files: target.len(),
        removable_count: matches.len(),
        reclaimable_bytes,
    };

    log::debug!(
        "{} of {} source files are redundant ({} bytes reclaimable)",
        stats.removable_count,
        stats.source_files,
        stats.reclaimable_bytes
    );

    (matches, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fp(path: &str, size: u64, digest_byte: u8) -> FileFingerprint {
        FileFingerprint::new(PathBuf::from(path), size, [digest_byte; 32])
    }

    #[test]
    fn test_no_matches() {
        let source = vec![fp("/s/a", 1, 1)];
        let target = vec![fp("/t/b", 2, 2)];
        let (matches, stats) = find_redundant(&source, &target);

        assert!(matches.is_empty());
        assert_eq!(stats.removable_count, 0);
        assert_eq!(stats.reclaimable_bytes, 0);
        assert_eq!(stats.source_files, 1);
        assert_eq!(stats.target_files, 1);
    }

    #[test]
    fn test_single_match() {
        let source = vec![fp("/s/a", 10, 1), fp("/s/b", 20, 2)];
        let target = vec![fp("/t/x", 10, 1)];
        let (matches, stats) = find_redundant(&source, &target);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].source.path, PathBuf::from("/s/a"));
        assert_eq!(matches[0].target.path, PathBuf::from("/t/x"));
        assert_eq!(stats.removable_count, 1);
        assert_eq!(stats.reclaimable_bytes, 10);
    }

    #[test]
    fn test_first_target_match_wins() {
        let source = vec![fp("/s/a", 10, 1)];
        let target = vec![fp("/t/first", 10, 1), fp("/t/second", 10, 1)];
        let (matches, _) = find_redundant(&source, &target);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].target.path, PathBuf::from("/t/first"));
    }

    #[test]
    fn test_digest_collision_with_different_size_rejected() {
        let source = vec![fp("/s/a", 10, 1)];
        let target = vec![fp("/t/x", 99, 1)];
        let (matches, stats) = find_redundant(&source, &target);

        assert!(matches.is_empty());
        assert_eq!(stats.reclaimable_bytes, 0);
    }

    #[test]
    fn test_bucket_skips_wrong_size_then_matches() {
        let source = vec![fp("/s/a", 10, 1)];
        let target = vec![fp("/t/wrong-size", 99, 1), fp("/t/right", 10, 1)];
        let (matches, _) = find_redundant(&source, &target);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].target.path, PathBuf::from("/t/right"));
    }

    #[test]
    fn test_reclaimable_bytes_measured_on_source() {
        // Two redundant source copies of the same content count twice.
        let source = vec![fp("/s/a", 7, 1), fp("/s/b", 7, 1)];
        let target = vec![fp("/t/x", 7, 1)];
        let (matches, stats) = find_redundant(&source, &target);

        assert_eq!(matches.len(), 2);
        assert_eq!(stats.reclaimable_bytes, 14);
    }

    #[test]
    fn test_search_is_not_symmetric() {
        let source = vec![fp("/s/a", 7, 1), fp("/s/b", 7, 1)];
        let target = vec![fp("/t/x", 7, 1)];

        let (forward, forward_stats) = find_redundant(&source, &target);
        let (reverse, reverse_stats) = find_redundant(&target, &source);

        assert_eq!(forward.len(), 2);
        assert_eq!(reverse.len(), 1);
        assert_eq!(forward_stats.reclaimable_bytes, 14);
        assert_eq!(reverse_stats.reclaimable_bytes, 7);
    }

    #[test]
    fn test_matches_preserve_source_order() {
        let source = vec![fp("/s/z", 1, 1), fp("/s/a", 2, 2), fp("/s/m", 3, 3)];
        let target = vec![fp("/t/1", 1, 1), fp("/t/2", 2, 2), fp("/t/3", 3, 3)];
        let (matches, _) = find_redundant(&source, &target);

        let order: Vec<_> = matches.iter().map(|m| m.source.path.clone()).collect();
        assert_eq!(
            order,
            vec![
                PathBuf::from("/s/z"),
                PathBuf::from("/s/a"),
                PathBuf::from("/s/m")
            ]
        );
    }

    #[test]
    fn test_empty_sets() {
        let (matches, stats) = find_redundant(&[], &[]);
        assert!(matches.is_empty());
        assert_eq!(stats, RedundancyStats::default());
    }
}
