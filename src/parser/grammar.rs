//! Loading the tree-sitter C++ grammar.

use std::path::Path;

use libloading::{Library, Symbol};
use tree_sitter::Language;
use tree_sitter_language::LanguageFn;

use crate::config::GrammarSource;
use crate::error::{ExtractError, Result};

/// Exported constructor of a tree-sitter C++ grammar library.
const GRAMMAR_SYMBOL: &[u8] = b"tree_sitter_cpp\0";

/// Turn a grammar source into a language the parser accepts.
///
/// The language is checked against the linked tree-sitter ABI here, so a
/// bad grammar fails before any input is read.
pub fn load_language(source: &GrammarSource) -> Result<Language> {
    let language = match source {
        GrammarSource::Bundled => tree_sitter_cpp::LANGUAGE.into(),
        GrammarSource::SharedLibrary(path) => load_shared_library(path)?,
    };

    tree_sitter::Parser::new().set_language(&language)?;
    tracing::debug!(
        grammar = %source.describe(),
        abi = language.version(),
        "loaded C++ grammar"
    );
    Ok(language)
}

fn load_shared_library(path: &Path) -> Result<Language> {
    if !path.is_file() {
        return Err(ExtractError::GrammarNotFound {
            path: path.to_path_buf(),
        });
    }

    let load_error = |source| ExtractError::GrammarLoad {
        path: path.to_path_buf(),
        source,
    };

    // SAFETY: the library is a tree-sitter grammar; its initialisers have no
    // preconditions and `tree_sitter_cpp` has the standard constructor signature.
    let library = unsafe { Library::new(path) }.map_err(load_error)?;
    let constructor = unsafe {
        let symbol: Symbol<unsafe extern "C" fn() -> *const ()> =
            library.get(GRAMMAR_SYMBOL).map_err(load_error)?;
        *symbol
    };

    // Language tables live inside the library, which must stay mapped for
    // the rest of the process.
    std::mem::forget(library);

    // SAFETY: `constructor` is the grammar's exported language function.
    Ok(Language::new(unsafe { LanguageFn::from_raw(constructor) }))
}
