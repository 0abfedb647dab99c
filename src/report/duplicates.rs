//! Duplicate-group report writer.

use std::io::Write;

use crate::analysis::{DuplicateGroup, DuplicateStats};

use super::{human_size, Verbosity};

/// Renders duplicate groups as text.
///
/// Each qualifying group prints its digest followed by the indented paths
/// of every member. At [`Verbosity::Detailed`] the groups are preceded by
/// aggregate summary lines.
pub struct DuplicateReport<'a> {
    groups: &'a [DuplicateGroup],
    stats: &'a DuplicateStats,
    verbosity: Verbosity,
}

impl<'a> DuplicateReport<'a> {
    /// Create a report over grouping results.
    #[must_use]
    pub fn new(
        groups: &'a [DuplicateGroup],
        stats: &'a DuplicateStats,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            groups,
            stats,
            verbosity,
        }
    }

    /// Write the report to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Detailed {
            writeln!(writer, "Files scanned\t\t{}", self.stats.files_scanned)?;
            writeln!(writer, "Duplicate files\t\t{}", self.stats.duplicate_files)?;
            writeln!(
                writer,
                "Wasted space\t\t{}",
                human_size(self.stats.wasted_bytes)
            )?;
        }

        for group in self.groups {
            match self.verbosity {
                Verbosity::Bare => writeln!(writer, "{}:", group.digest_hex())?,
                Verbosity::Labeled | Verbosity::Detailed => {
                    writeln!(writer, "Duplicate group {}:", group.digest_hex())?;
                }
            }
            for file in &group.files {
                writeln!(writer, "\t- {}", file.path.display())?;
            }
        }

        Ok(())
    }
}
