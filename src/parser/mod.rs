//! Turning C++ source bytes into a tree-sitter syntax tree.
//!
//! The grammar itself is an external collaborator: this module only loads it,
//! hands it the bytes, and keeps the resulting tree together with the buffer
//! its spans point into.

use std::path::{Path, PathBuf};

use tree_sitter::{Language, Parser, Tree};

use crate::config::GrammarSource;
use crate::error::{ExtractError, Result};

mod grammar;

pub use grammar::load_language;

/// A parsed translation unit.
///
/// Owns the raw bytes and the tree built over them; node spans are byte
/// offsets into `source`.
pub struct SourceUnit {
    /// The file the bytes came from.
    pub path: PathBuf,
    /// Raw bytes of the file; node spans index into this buffer.
    pub source: Vec<u8>,
    /// The tree-sitter parse tree.
    pub tree: Tree,
}

impl SourceUnit {
    /// Root node of the tree.
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Whether error recovery had to insert ERROR or MISSING nodes.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// C++ parser bound to one grammar.
pub struct CppParser {
    language: Language,
}

impl CppParser {
    /// Load the grammar and build a parser for it.
    pub fn new(grammar: &GrammarSource) -> Result<Self> {
        Ok(Self {
            language: load_language(grammar)?,
        })
    }

    fn create_parser(&self) -> Result<Parser> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        Ok(parser)
    }

    /// Parse an in-memory buffer.
    ///
    /// Syntax errors do not fail the parse; they surface as ERROR nodes in
    /// the returned tree.
    pub fn parse(&self, path: &Path, source: Vec<u8>) -> Result<SourceUnit> {
        let mut parser = self.create_parser()?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ExtractError::Parse {
                path: path.to_path_buf(),
            })?;

        Ok(SourceUnit {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }

    /// Read a file fully and parse it.
    pub fn parse_file(&self, path: &Path) -> Result<SourceUnit> {
        let source = std::fs::read(path).map_err(|source| ExtractError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "read input");
        self.parse(path, source)
    }
}
