//! Lexical scope resolution by walking a node's ancestors.

use super::kinds::{
    CLASS_NAME_KINDS, CLASS_SPECIFIER, NAMESPACE_DEFINITION, NAMESPACE_NAME_KINDS,
    SCOPE_NAME_PRUNE, STRUCT_SPECIFIER,
};
use super::{find_first_pruned, node_text, SyntaxNode};

/// Names of the namespaces, classes and structs enclosing `node`, outermost
/// first.
///
/// Only syntax is consulted: an out-of-class definition such as
/// `void Box::get()` at file scope has an empty chain. Anonymous namespaces
/// and classes contribute nothing.
pub fn scope_chain<N: SyntaxNode>(node: N, source: &[u8]) -> Vec<String> {
    let mut names = Vec::new();
    let mut current = node.parent();

    while let Some(ancestor) = current {
        if let Some(name) = scope_name(ancestor, source) {
            names.push(name);
        }
        current = ancestor.parent();
    }

    names.reverse();
    names
}

fn scope_name<N: SyntaxNode>(node: N, source: &[u8]) -> Option<String> {
    let name_kinds = match node.kind() {
        NAMESPACE_DEFINITION => NAMESPACE_NAME_KINDS,
        CLASS_SPECIFIER | STRUCT_SPECIFIER => CLASS_NAME_KINDS,
        _ => return None,
    };

    let name_node = find_first_pruned(node, name_kinds, SCOPE_NAME_PRUNE)?;
    let name = node_text(name_node, source).trim().to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
