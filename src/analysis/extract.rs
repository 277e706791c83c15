//! Decomposing a function definition into a [`FunctionRecord`].
//!
//! Every lookup here is best-effort. When an expected piece of the tree is
//! missing, only the affected fields fall back to their defaults:
//!
//! | missing            | fields                                              |
//! |--------------------|-----------------------------------------------------|
//! | declarator         | name `<unknown>`, parameters `()`, pre/post/signature empty |
//! | name node          | name `<unknown>`                                    |
//! | parameter list     | parameters `()`, post-qualifiers empty              |
//! | compound statement | body empty                                          |

use super::facts::{qualify, FunctionRecord, Location, EMPTY_PARAMETER_LIST, UNKNOWN_NAME};
use super::kinds::{
    BODY_FIELD, COMPOUND_STATEMENT, DECLARATOR_FIELD, FUNCTION_DECLARATOR, FUNCTION_NAME_KINDS,
    PARAMETER_LIST,
};
use super::scope::scope_chain;
use super::{byte_range_text, find_first, node_text, SyntaxNode};

/// Extract the record for one `function_definition` node.
pub fn extract_function<N: SyntaxNode>(node: N, source: &[u8]) -> FunctionRecord {
    let location = Location::from_node(node);
    let declarator = find_declarator(node);
    if declarator.is_none() {
        tracing::debug!(%location, "function definition has no declarator");
    }

    let name = declarator
        .and_then(|d| find_first(d, FUNCTION_NAME_KINDS))
        .map(|n| node_text(n, source).trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let params = declarator.and_then(|d| find_first(d, &[PARAMETER_LIST]));
    let parameter_list = params
        .map(|p| node_text(p, source).trim().to_string())
        .unwrap_or_else(|| EMPTY_PARAMETER_LIST.to_string());

    let return_and_specifiers = declarator
        .map(|d| trimmed_range(source, node.start_byte(), d.start_byte()))
        .unwrap_or_default();

    let post_qualifiers = match (declarator, params) {
        (Some(d), Some(p)) => trimmed_range(source, p.end_byte(), d.end_byte()),
        _ => String::new(),
    };

    let body = find_body(node)
        .map(|b| node_text(b, source).trim().to_string())
        .unwrap_or_default();
    if body.is_empty() {
        tracing::debug!(%location, name = %name, "function definition has no body");
    }

    let signature = match declarator {
        Some(d) => collapse_whitespace(&format!(
            "{} {}",
            return_and_specifiers,
            node_text(d, source).trim()
        )),
        None => collapse_whitespace(&return_and_specifiers),
    };

    let scope = scope_chain(node, source);
    let fully_qualified_name = qualify(&scope, &name);

    FunctionRecord {
        name,
        fully_qualified_name,
        return_and_specifiers,
        parameter_list,
        post_qualifiers,
        signature,
        body,
        location,
        scope,
    }
}

/// The first `function_declarator` in pre-order, else the definition's
/// `declarator` field.
///
/// Pre-order reaches the definition's own declarator before its body, so a
/// local declaration such as `int helper(int);` inside the body is never
/// picked over it.
fn find_declarator<N: SyntaxNode>(node: N) -> Option<N> {
    find_first(node, &[FUNCTION_DECLARATOR]).or_else(|| node.child_by_field(DECLARATOR_FIELD))
}

/// The `body` field when it is a compound statement, else the first compound
/// statement anywhere in the definition (covers function-try-blocks).
fn find_body<N: SyntaxNode>(node: N) -> Option<N> {
    node.child_by_field(BODY_FIELD)
        .filter(|b| b.kind() == COMPOUND_STATEMENT)
        .or_else(|| find_first(node, &[COMPOUND_STATEMENT]))
}

fn trimmed_range(source: &[u8], start: usize, end: usize) -> String {
    byte_range_text(source, start, end).trim().to_string()
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
