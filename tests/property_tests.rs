//! Property-based tests for fingerprint equality and grouping.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use dupescan::analysis::group_duplicates;
use dupescan::scanner::{fingerprint_file, FileFingerprint};
use proptest::prelude::*;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    File::create(&path).unwrap().write_all(content).unwrap();
    path
}

proptest! {
    #[test]
    fn fingerprint_size_equals_content_length(content in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "f.bin", &content);

        let fp = fingerprint_file(&path, content.len() as u64, 0).unwrap();
        prop_assert_eq!(fp.size, content.len() as u64);
    }

    #[test]
    fn identical_content_is_same_content_regardless_of_path(
        content in proptest::collection::vec(any::<u8>(), 0..2048),
        header in 0u64..64,
    ) {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "first.bin", &content);
        let b = write_file(&dir, "second.bin", &content);

        let fa = fingerprint_file(&a, content.len() as u64, header).unwrap();
        let fb = fingerprint_file(&b, content.len() as u64, header).unwrap();
        prop_assert!(fa.same_content(&fb));
        prop_assert!(fb.same_content(&fa), "same_content must be symmetric");
    }

    #[test]
    fn same_content_is_symmetric_over_arbitrary_fingerprints(
        size_a in 0u64..1000,
        size_b in 0u64..1000,
        byte_a in any::<u8>(),
        byte_b in any::<u8>(),
    ) {
        let a = FileFingerprint::new(PathBuf::from("/a"), size_a, [byte_a; 32]);
        let b = FileFingerprint::new(PathBuf::from("/b"), size_b, [byte_b; 32]);
        prop_assert_eq!(a.same_content(&b), b.same_content(&a));
    }

    #[test]
    fn grouping_twice_yields_identical_membership(
        digests in proptest::collection::vec(0u8..8, 0..40),
    ) {
        let files: Vec<FileFingerprint> = digests
            .iter()
            .enumerate()
            .map(|(i, d)| FileFingerprint::new(
                PathBuf::from(format!("/f{i}")),
                u64::from(*d) + 1,
                [*d; 32],
            ))
            .collect();

        let (first, first_stats) = group_duplicates(&files);
        let (second, second_stats) = group_duplicates(&files);

        prop_assert_eq!(first_stats, second_stats);
        let membership = |groups: &[dupescan::analysis::DuplicateGroup]| {
            groups
                .iter()
                .map(|g| {
                    g.files
                        .iter()
                        .map(|f| f.path.clone())
                        .collect::<BTreeSet<_>>()
                })
                .collect::<BTreeSet<_>>()
        };
        prop_assert_eq!(membership(&first), membership(&second));
    }

    #[test]
    fn no_group_smaller_than_two(
        digests in proptest::collection::vec(0u8..16, 0..60),
    ) {
        let files: Vec<FileFingerprint> = digests
            .iter()
            .enumerate()
            .map(|(i, d)| FileFingerprint::new(PathBuf::from(format!("/f{i}")), 10, [*d; 32]))
            .collect();

        let (groups, stats) = group_duplicates(&files);
        prop_assert!(groups.iter().all(|g| g.files.len() >= 2));
        prop_assert_eq!(
            stats.duplicate_files,
            groups.iter().map(|g| g.files.len()).sum::<usize>()
        );
    }
}
