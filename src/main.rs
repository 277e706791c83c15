//! cppextract CLI entry point.

use clap::Parser;
use cppextract::cli::{self, Cli, EXIT_FAILED};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::init_tracing(cli.quiet, cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_FAILED);
    }

    let exit_code = match cli::run_extract(&cli.config()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILED
        }
    };

    std::process::exit(exit_code);
}
