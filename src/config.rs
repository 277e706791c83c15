//! Run configuration.
//!
//! All configuration is resolved once, at the entry point, into a [`Config`]
//! value that is passed down explicitly. Nothing below the CLI reads the
//! process environment.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a tree-sitter C++ grammar shared library.
pub const GRAMMAR_ENV: &str = "TREE_SITTER_LANG_SO";

/// Where the C++ grammar comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GrammarSource {
    /// The `tree-sitter-cpp` grammar compiled into this binary.
    #[default]
    Bundled,
    /// A grammar shared library loaded at runtime.
    SharedLibrary(PathBuf),
}

impl GrammarSource {
    /// Resolve the grammar source: explicit path, then `$TREE_SITTER_LANG_SO`,
    /// then the bundled grammar.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        Self::resolve_with(explicit, std::env::var_os(GRAMMAR_ENV))
    }

    /// Same as [`GrammarSource::resolve`] with the environment value supplied
    /// by the caller. An empty environment value counts as unset.
    pub fn resolve_with(explicit: Option<&Path>, env_value: Option<OsString>) -> Self {
        if let Some(path) = explicit {
            return GrammarSource::SharedLibrary(path.to_path_buf());
        }
        match env_value {
            Some(value) if !value.is_empty() => GrammarSource::SharedLibrary(PathBuf::from(value)),
            _ => GrammarSource::Bundled,
        }
    }

    /// Short human-readable description for logs.
    pub fn describe(&self) -> String {
        match self {
            GrammarSource::Bundled => "bundled tree-sitter-cpp".to_string(),
            GrammarSource::SharedLibrary(path) => path.display().to_string(),
        }
    }
}

/// Everything one extraction run needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// C++ source file to scan.
    pub input: PathBuf,
    /// Destination of the JSON report.
    pub output: PathBuf,
    /// Grammar to parse with.
    pub grammar: GrammarSource,
}

impl Config {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input: I, output: O, grammar: GrammarSource) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            grammar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let source = GrammarSource::resolve_with(
            Some(Path::new("grammars/cpp.so")),
            Some(OsString::from("/opt/other.so")),
        );
        assert_eq!(source, GrammarSource::SharedLibrary(PathBuf::from("grammars/cpp.so")));
    }

    #[test]
    fn test_environment_used_when_no_flag() {
        let source = GrammarSource::resolve_with(None, Some(OsString::from("/opt/cpp.so")));
        assert_eq!(source, GrammarSource::SharedLibrary(PathBuf::from("/opt/cpp.so")));
    }

    #[test]
    fn test_bundled_by_default() {
        assert_eq!(GrammarSource::resolve_with(None, None), GrammarSource::Bundled);
        assert_eq!(
            GrammarSource::resolve_with(None, Some(OsString::new())),
            GrammarSource::Bundled
        );
    }
}
