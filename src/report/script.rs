//! Advisory shell deletion commands.
//!
//! Emits one `rm` command per removable source file, single-quoted for
//! POSIX shells. This output is advisory text only; the engine never
//! deletes anything itself.

use std::io::Write;
use std::path::Path;

use crate::analysis::RedundancyMatch;

/// Writer for the advisory deletion-command block.
pub struct DeletionCommands<'a> {
    matches: &'a [RedundancyMatch],
}

impl<'a> DeletionCommands<'a> {
    /// Create a command block over redundancy matches.
    #[must_use]
    pub fn new(matches: &'a [RedundancyMatch]) -> Self {
        Self { matches }
    }

    /// Write the command block to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "Commands to remove all redundant files")?;
        for m in self.matches {
            writeln!(writer, "rm {}", quote_posix(&m.source.path))?;
        }
        Ok(())
    }
}

/// Single-quote a path for POSIX shells.
///
/// Everything inside single quotes is literal; an embedded single quote is
/// rendered as `'\''` (close quote, escaped quote, reopen quote).
#[must_use]
pub fn quote_posix(path: &Path) -> String {
    let raw = path.display().to_string();
    format!("'{}'", raw.replace('\'', r"'\''"))
}
