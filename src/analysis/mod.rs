//! Matching algorithms over fingerprint sets.
//!
//! Two analyses share the scanner's fingerprints:
//! - [`duplicates`]: partition one tree's fingerprints into groups of
//!   content-equal files
//! - [`redundancy`]: find files in a source tree whose content already
//!   exists somewhere in a target tree

pub mod duplicates;
pub mod redundancy;

pub use duplicates::{group_duplicates, DuplicateGroup, DuplicateStats};
pub use redundancy::{find_redundant, RedundancyMatch, RedundancyStats};
