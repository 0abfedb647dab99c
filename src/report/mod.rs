//! Textual report rendering.
//!
//! Reports are written to any [`std::io::Write`] sink at one of three
//! verbosity levels; the engine itself never touches the filesystem here.
//! Deletion commands, when requested, are advisory text only.

pub mod duplicates;
pub mod redundancy;
pub mod script;

pub use duplicates::DuplicateReport;
pub use redundancy::RedundancyReport;
pub use script::DeletionCommands;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

/// How much detail a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// One bare line per result
    Bare,
    /// A short descriptive prefix per line
    Labeled,
    /// Per-result detail plus aggregate summary lines
    Detailed,
}

impl Verbosity {
    /// Map a CLI `-v` count onto a level; anything past 2 stays detailed.
    #[must_use]
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Bare,
            1 => Self::Labeled,
            _ => Self::Detailed,
        }
    }
}

/// Render a byte count in human units.
///
/// Below 1024 the unit is `bytes` with an integer value; above, the count
/// is divided at successive 1024 thresholds into KB, MB or GB and printed
/// with six decimal places, the precision the classic tools in this family
/// use.
#[must_use]
pub fn human_size(size: u64) -> String {
    if size < KIB {
        format!("{size} bytes")
    } else if size < MIB {
        format!("{:.6} KB", size as f64 / KIB as f64)
    } else if size < GIB {
        format!("{:.6} MB", size as f64 / MIB as f64)
    } else {
        format!("{:.6} GB", size as f64 / GIB as f64)
    }
}
