//! Entry point for the dupescan CLI.

use clap::Parser;
use dupescan::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = dupescan::run_app(cli) {
        // Print the full error chain; walk errors carry the failing path.
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
