//! Redundancy report writer.

use std::io::Write;

use crate::analysis::{RedundancyMatch, RedundancyStats};

use super::{human_size, DeletionCommands, Verbosity};

/// Renders cross-tree redundancy results as text.
///
/// One line per removable source file, shaped by verbosity; at
/// [`Verbosity::Detailed`] a summary block follows, and an advisory
/// deletion-command block can be appended on request.
pub struct RedundancyReport<'a> {
    matches: &'a [RedundancyMatch],
    stats: &'a RedundancyStats,
    verbosity: Verbosity,
    with_delete_commands: bool,
}

impl<'a> RedundancyReport<'a> {
    /// Create a report over redundancy results.
    #[must_use]
    pub fn new(
        matches: &'a [RedundancyMatch],
        stats: &'a RedundancyStats,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            matches,
            stats,
            verbosity,
            with_delete_commands: false,
        }
    }

    /// Append an advisory deletion-command block after the report.
    #[must_use]
    pub fn with_delete_commands(mut self, enabled: bool) -> Self {
        self.with_delete_commands = enabled;
        self
    }

    /// Write the report to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for m in self.matches {
            match self.verbosity {
                Verbosity::Bare => writeln!(writer, "{}", m.source.path.display())?,
                Verbosity::Labeled => {
                    writeln!(writer, "You can delete file {}", m.source.path.display())?;
                }
                Verbosity::Detailed => {
                    writeln!(writer, "You can delete file {}", m.source.path.display())?;
                    writeln!(writer, "\tduplicate on: {}", m.target.path.display())?;
                }
            }
        }

        if self.verbosity == Verbosity::Detailed {
            writeln!(writer, "{}\t\tfiles on source", self.stats.source_files)?;
            writeln!(writer, "{}\t\tfiles on target", self.stats.target_files)?;
            writeln!(
                writer,
                "You can remove {} files",
                self.stats.removable_count
            )?;
            writeln!(
                writer,
                "You can free {}",
                human_size(self.stats.reclaimable_bytes)
            )?;
        }

        if self.with_delete_commands {
            DeletionCommands::new(self.matches).write_to(writer)?;
        }

        Ok(())
    }
}
