//! cppextract - C++ function definitions as structured JSON.
//!
//! cppextract parses one C++ translation unit with tree-sitter and emits a
//! record for every function definition it contains: name, fully qualified
//! name, enclosing scopes, declarator pieces, body text and location. The
//! records feed downstream tooling (formatters, optimizers, test generators)
//! that works one function at a time.
//!
//! # Architecture
//!
//! - `config`: grammar source and run configuration, resolved once
//! - `parser`: grammar loading and tree-sitter parsing into a `SourceUnit`
//! - `analysis`: tree walk, scope resolution and per-function extraction
//! - `report`: file-level aggregation and JSON output
//! - `cli`: argument parsing, logging and exit codes
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use cppextract::{CppParser, GrammarSource, Report};
//!
//! let parser = CppParser::new(&GrammarSource::Bundled)?;
//! let unit = parser.parse_file(Path::new("src/linalg.cpp"))?;
//! let report = Report::from_unit(&unit);
//! report.write(Path::new("linalg.json"))?;
//! # Ok::<(), cppextract::ExtractError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod report;

pub use analysis::{extract_functions, extract_unit, FunctionRecord, Location, SyntaxNode};
pub use config::{Config, GrammarSource};
pub use error::{ExtractError, Result};
pub use parser::{CppParser, SourceUnit};
pub use report::Report;
