//! Function extraction from C++ syntax trees.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ SourceUnit │────▶│ walker       │────▶│ extract          │
//! │ (tree +    │     │ (pre-order,  │     │ (declarator,     │
//! │  bytes)    │     │  definitions)│     │  name, params…)  │
//! └────────────┘     └──────────────┘     └──────────────────┘
//!                                                  │  ▲
//!                                                  ▼  │
//!                                          ┌──────────────────┐
//!                                          │ scope            │
//!                                          │ (ancestor walk)  │
//!                                          └──────────────────┘
//! ```
//!
//! All of it is written against [`SyntaxNode`], implemented for
//! `tree_sitter::Node`.

mod extract;
mod facts;
mod kinds;
mod scope;
mod traits;
mod walker;

#[cfg(test)]
mod mock;

pub use extract::{collapse_whitespace, extract_function};
pub use facts::{qualify, FunctionRecord, Location, EMPTY_PARAMETER_LIST, UNKNOWN_NAME};
pub use scope::scope_chain;
pub use traits::{byte_range_text, find_first, find_first_pruned, node_text, SyntaxNode};
pub use walker::function_definitions;

use crate::parser::SourceUnit;

/// Extract a record for every function definition under `root`, in source
/// order.
pub fn extract_functions<N: SyntaxNode>(root: N, source: &[u8]) -> Vec<FunctionRecord> {
    function_definitions(root)
        .into_iter()
        .map(|node| {
            let record = extract_function(node, source);
            tracing::debug!(
                name = %record.fully_qualified_name,
                location = %record.location,
                "extracted function"
            );
            record
        })
        .collect()
}

/// Extract every function definition in a parsed unit.
pub fn extract_unit(unit: &SourceUnit) -> Vec<FunctionRecord> {
    if unit.has_errors() {
        tracing::warn!(
            path = %unit.path.display(),
            "source has syntax errors; extraction is best-effort"
        );
    }
    extract_functions(unit.root(), &unit.source)
}
