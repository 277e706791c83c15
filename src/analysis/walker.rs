//! Collecting function definitions from a syntax tree.

use super::kinds::FUNCTION_DEFINITION;
use super::SyntaxNode;

/// Every `function_definition` node under `root`, in pre-order.
///
/// The whole tree is visited, including matched nodes' subtrees, so
/// definitions nested in class bodies, local classes and other functions are
/// all found. Visitation order is source order.
pub fn function_definitions<N: SyntaxNode>(root: N) -> Vec<N> {
    let mut found = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.kind() == FUNCTION_DEFINITION {
            found.push(node);
        }
        // Reverse so the leftmost child is popped first.
        stack.extend(node.children().into_iter().rev());
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::mock::MockTree;

    #[test]
    fn test_preorder_includes_nested_definitions() {
        let source = "aaaa bbbb cccc";
        let mut tree = MockTree::new(source);
        let root = tree.root();
        let outer = tree.add(root, "function_definition", 0, 9);
        let body = tree.add(outer, "compound_statement", 5, 9);
        tree.add(body, "function_definition", 5, 9);
        tree.add(root, "function_definition", 10, 14);

        let found = function_definitions(tree.node(root));
        let starts: Vec<usize> = found.iter().map(|n| n.start_byte()).collect();
        assert_eq!(starts, vec![0, 5, 10]);
    }

    #[test]
    fn test_no_definitions() {
        let mut tree = MockTree::new("int x;");
        let root = tree.root();
        tree.add(root, "declaration", 0, 6);

        assert!(function_definitions(tree.node(root)).is_empty());
    }
}
