//! Command-line interface for cppextract.

use clap::Parser;
use colored::*;
use std::path::PathBuf;

use crate::config::{Config, GrammarSource, GRAMMAR_ENV};
use crate::error::ExtractError;
use crate::parser::CppParser;
use crate::report::Report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;

/// Environment variable holding a tracing filter (e.g. `cppextract=debug`).
pub const LOG_ENV: &str = "CPPEXTRACT_LOG";

/// Extract every C++ function definition in a file into a JSON report.
///
/// Each record carries the function's name, fully qualified name, enclosing
/// scopes, return type and specifiers, parameter list, trailing qualifiers,
/// normalised signature, body text and source location.
#[derive(Parser)]
#[command(name = "cppextract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// C++ source file to scan
    pub input: PathBuf,

    /// Path of the JSON report to write
    pub output: PathBuf,

    /// tree-sitter C++ grammar shared library (overrides $TREE_SITTER_LANG_SO;
    /// defaults to the bundled grammar)
    #[arg(short, long, value_name = "PATH")]
    pub grammar: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log per-function extraction details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the run configuration. The environment is consulted here and
    /// nowhere else.
    pub fn config(&self) -> Config {
        Config::new(
            &self.input,
            &self.output,
            GrammarSource::resolve(self.grammar.as_deref()),
        )
    }
}

/// Install the stderr tracing subscriber.
pub fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Run one extraction: load the grammar, parse the input, write the report.
///
/// Fatal errors are printed here and mapped to an exit code; the report is
/// only written once everything before it has succeeded.
pub fn run_extract(config: &Config) -> anyhow::Result<i32> {
    tracing::debug!(
        input = %config.input.display(),
        output = %config.output.display(),
        grammar = %config.grammar.describe(),
        "starting extraction"
    );

    // Grammar problems are reported before the input is touched.
    let parser = match CppParser::new(&config.grammar) {
        Ok(p) => p,
        Err(e) => return Ok(report_error(&e)),
    };

    let report = match parser.parse_file(&config.input) {
        Ok(unit) => Report::from_unit(&unit),
        Err(e) => return Ok(report_error(&e)),
    };

    if let Err(e) = report.write(&config.output) {
        return Ok(report_error(&e));
    }

    println!(
        "Wrote {} functions to {}",
        report.num_functions.to_string().bold(),
        config.output.display()
    );

    Ok(EXIT_SUCCESS)
}

fn report_error(err: &ExtractError) -> i32 {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if err.is_configuration() {
        eprintln!(
            "Pass --grammar <PATH>, set {}, or unset it to use the bundled grammar",
            GRAMMAR_ENV
        );
        EXIT_CONFIG
    } else {
        EXIT_FAILED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["cppextract", "src/linalg.cpp", "out.json"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("src/linalg.cpp"));
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert!(cli.grammar.is_none());
        assert!(!cli.quiet && !cli.verbose);
    }

    #[test]
    fn test_grammar_flag_resolves_to_library() {
        let cli = Cli::try_parse_from([
            "cppextract",
            "--grammar",
            "build/my-languages.so",
            "a.cpp",
            "a.json",
        ])
        .unwrap();

        assert_eq!(
            cli.config().grammar,
            GrammarSource::SharedLibrary(PathBuf::from("build/my-languages.so"))
        );
    }

    #[test]
    fn test_output_is_required() {
        assert!(Cli::try_parse_from(["cppextract", "a.cpp"]).is_err());
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["cppextract", "-q", "-v", "a.cpp", "a.json"]).is_err());
    }
}
