//! Logging infrastructure.
//!
//! Diagnostics use the `log` facade with an `env_logger` backend and go to
//! stderr; reports go to stdout and are never routed through the logger.
//! The effective level is determined by, in priority order:
//!
//! 1. the `RUST_LOG` environment variable, if set
//! 2. `--quiet` (errors only)
//! 3. the `-v` count (0 = warn, 1 = info, 2+ = debug)

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Initialize the logging subsystem from the CLI flags.
///
/// Call once, before any logging macros run.
///
/// # Panics
///
/// Panics if called more than once; `env_logger` can only be installed
/// once per process.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();

    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    builder.format(|buf, record| {
        let level = record.level();
        let style = buf.default_level_style(level);
        writeln!(buf, "{style}{level:<5}{style:#} {}", record.args())
    });

    builder.init();
    log::debug!("logging initialized at {:?}", log::max_level());
}

/// Map the CLI flags onto a log level.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_level_default() {
        assert_eq!(determine_level(0, false), LevelFilter::Warn);
    }

    #[test]
    fn test_determine_level_verbose_steps() {
        assert_eq!(determine_level(1, false), LevelFilter::Info);
        assert_eq!(determine_level(2, false), LevelFilter::Debug);
        assert_eq!(determine_level(5, false), LevelFilter::Debug);
    }

    #[test]
    fn test_determine_level_quiet_wins() {
        assert_eq!(determine_level(0, true), LevelFilter::Error);
        assert_eq!(determine_level(2, true), LevelFilter::Error);
    }
}
