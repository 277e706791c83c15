//! Error types for the extraction pipeline.
//!
//! Only failures at the resource boundary are errors: grammar configuration,
//! reading the input, parsing, serializing and writing the report. Anything
//! that goes wrong while decomposing a single function is absorbed by the
//! extractor as a field default.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::GRAMMAR_ENV;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that terminate an extraction run.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The configured grammar library does not exist.
    #[error(
        "grammar library not found at '{}'; pass --grammar or set {}",
        .path.display(),
        GRAMMAR_ENV
    )]
    GrammarNotFound { path: PathBuf },

    /// The grammar library exists but could not be loaded.
    #[error("failed to load grammar from '{}': {source}", .path.display())]
    GrammarLoad {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// The grammar was built against an unsupported tree-sitter ABI.
    #[error("incompatible grammar: {0}")]
    IncompatibleGrammar(#[from] tree_sitter::LanguageError),

    /// The input file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parser returned no tree at all.
    #[error("failed to parse C++ source: {}", .path.display())]
    Parse { path: PathBuf },

    /// The report could not be rendered as, or read back from, JSON.
    #[error("report JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    /// Whether this error comes from grammar configuration rather than I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ExtractError::GrammarNotFound { .. }
                | ExtractError::GrammarLoad { .. }
                | ExtractError::IncompatibleGrammar(_)
        )
    }
}
