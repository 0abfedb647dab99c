//! Command-line interface definitions for dupescan.
//!
//! All arguments use the clap derive API: global options (report verbosity,
//! quiet) plus one subcommand per analysis.
//!
//! # Example
//!
//! ```bash
//! # Duplicate groups inside one tree
//! dupescan duplicates ~/Downloads
//!
//! # Whole-file hashing with the full summary
//! dupescan -vv duplicates ~/Downloads -b 0
//!
//! # Which files in backup/ already exist in archive/?
//! dupescan -vv redundant ~/backup ~/archive --generate-delete-commands
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Find duplicate and redundant files using partial-content fingerprints.
///
/// Files are identified by size plus a BLAKE3 digest over their leading
/// bytes; matching is a heuristic confirmed by size, never a byte-by-byte
/// proof. Deletion commands are advisory text and are never executed.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase report detail (-v labels each result, -vv adds summaries)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find groups of content-equal files within one directory tree
    Duplicates(DuplicatesArgs),
    /// Find files in SOURCE whose content already exists in TARGET
    Redundant(RedundantArgs),
}

/// Arguments for the duplicates subcommand.
#[derive(Debug, Args)]
pub struct DuplicatesArgs {
    /// Directory tree to scan
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Leading bytes hashed per file; 0 hashes the whole file
    #[arg(short = 'b', long, value_name = "BYTES", default_value_t = 1024)]
    pub header_bytes: u64,
}

/// Arguments for the redundant subcommand.
#[derive(Debug, Args)]
pub struct RedundantArgs {
    /// Tree containing candidate files for deletion
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Tree that must already hold an equal copy
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Leading bytes hashed per file; 0 hashes the whole file
    #[arg(short = 'b', long, value_name = "BYTES", default_value_t = 1024)]
    pub header_bytes: u64,

    /// Print one advisory shell removal command per redundant file
    #[arg(short = 'g', long)]
    pub generate_delete_commands: bool,
}
