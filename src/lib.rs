//! dupescan - duplicate and redundant file finder
//!
//! Identifies duplicate files within one directory tree and redundant files
//! across two trees using partial-content fingerprinting (path, size,
//! BLAKE3 digest over a bounded prefix), then reports what could be deleted
//! without ever deleting anything itself.

pub mod analysis;
pub mod cli;
pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::analysis::{find_redundant, group_duplicates};
use crate::cli::{Cli, Commands, DuplicatesArgs, RedundantArgs};
use crate::error::ScanError;
use crate::report::{DuplicateReport, RedundancyReport, Verbosity};
use crate::scanner::walk_tree;

/// Run the application with parsed CLI arguments, writing the report to
/// stdout.
///
/// Returns `Ok(())` for every completed run, including empty reports; any
/// walk or resolution error propagates to the caller, which maps it to a
/// non-zero exit.
///
/// # Errors
///
/// Returns an error when a root cannot be resolved, a walk fails, or the
/// report cannot be written.
pub fn run_app(cli: Cli) -> Result<()> {
    logging::init_logging(cli.verbose, cli.quiet);

    let verbosity = Verbosity::from_count(cli.verbose);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Duplicates(args) => run_duplicates(&args, verbosity, &mut out),
        Commands::Redundant(args) => run_redundant(&args, verbosity, &mut out),
    }
}

/// Resolve a user-supplied root to an absolute path before any scanning.
fn resolve_root(path: &Path) -> Result<PathBuf, ScanError> {
    fs::canonicalize(path).map_err(|source| ScanError::PathResolution {
        path: path.to_path_buf(),
        source,
    })
}

fn run_duplicates<W: Write>(
    args: &DuplicatesArgs,
    verbosity: Verbosity,
    out: &mut W,
) -> Result<()> {
    let root = resolve_root(&args.source)?;
    log::info!("scanning {} for duplicates", root.display());

    let files = walk_tree(&root, args.header_bytes)?;
    let (groups, stats) = group_duplicates(&files);

    DuplicateReport::new(&groups, &stats, verbosity).write_to(out)?;
    Ok(())
}

fn run_redundant<W: Write>(args: &RedundantArgs, verbosity: Verbosity, out: &mut W) -> Result<()> {
    let source_root = resolve_root(&args.source)?;
    let target_root = resolve_root(&args.target)?;
    log::info!(
        "scanning {} for files redundant against {}",
        source_root.display(),
        target_root.display()
    );

    let source = walk_tree(&source_root, args.header_bytes)?;
    let target = walk_tree(&target_root, args.header_bytes)?;
    let (matches, stats) = find_redundant(&source, &target);

    RedundancyReport::new(&matches, &stats, verbosity)
        .with_delete_commands(args.generate_delete_commands)
        .write_to(out)?;
    Ok(())
}
