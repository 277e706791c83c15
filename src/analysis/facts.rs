//! Records extracted from function definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::SyntaxNode;

/// Name used when no identifier can be found in a declarator.
pub const UNKNOWN_NAME: &str = "<unknown>";

/// Parameter list reported when a declarator has none.
pub const EMPTY_PARAMETER_LIST: &str = "()";

/// Source span of a definition, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Location {
    /// Create a location from a node (tree-sitter positions are 0-indexed).
    pub fn from_node<N: SyntaxNode>(node: N) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_line: start.row + 1,
            start_col: start.column + 1,
            end_line: end.row + 1,
            end_col: end.column + 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start_line, self.start_col, self.end_line, self.end_col
        )
    }
}

/// Everything extracted from one function definition.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Name as written in the declarator (may be qualified, e.g. `Box::get`).
    pub name: String,
    /// Enclosing scopes joined with `::`, followed by the name.
    pub fully_qualified_name: String,
    /// Everything before the declarator: return type, storage class, etc.
    pub return_and_specifiers: String,
    /// Parenthesised parameter list.
    pub parameter_list: String,
    /// Qualifiers after the parameter list (`const`, `noexcept`, `override`...).
    pub post_qualifiers: String,
    /// Specifiers plus declarator, whitespace-normalised.
    pub signature: String,
    /// Body including braces; empty if the definition has none.
    pub body: String,
    pub location: Location,
    /// Enclosing namespace/class names, outermost first.
    pub scope: Vec<String>,
}

/// Join a scope chain and a name with `::`.
pub fn qualify(scope: &[String], name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{}::{}", scope.join("::"), name)
    }
}
