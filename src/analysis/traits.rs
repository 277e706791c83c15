//! The view of the syntax tree that extraction works against.

use tree_sitter::Point;

/// Read-only access to one node of a parsed syntax tree.
///
/// Extraction only ever asks a node for its kind, span, children, parent and
/// named fields. Keeping that behind a trait lets the traversal logic run on
/// tree-sitter trees in production and on hand-built trees in tests.
pub trait SyntaxNode: Copy {
    /// Grammar kind of the node (e.g. `function_definition`).
    fn kind(&self) -> &str;

    /// Start byte offset (0-indexed).
    fn start_byte(&self) -> usize;

    /// End byte offset (0-indexed, exclusive).
    fn end_byte(&self) -> usize;

    /// Start row/column (0-indexed).
    fn start_position(&self) -> Point;

    /// End row/column (0-indexed).
    fn end_position(&self) -> Point;

    /// Enclosing node, or `None` at the root.
    fn parent(&self) -> Option<Self>;

    /// Direct children in source order.
    fn children(&self) -> Vec<Self>;

    /// Child stored under a grammar field name (e.g. `declarator`).
    fn child_by_field(&self, field: &str) -> Option<Self>;
}

impl SyntaxNode for tree_sitter::Node<'_> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn start_byte(&self) -> usize {
        tree_sitter::Node::start_byte(self)
    }

    fn end_byte(&self) -> usize {
        tree_sitter::Node::end_byte(self)
    }

    fn start_position(&self) -> Point {
        tree_sitter::Node::start_position(self)
    }

    fn end_position(&self) -> Point {
        tree_sitter::Node::end_position(self)
    }

    fn parent(&self) -> Option<Self> {
        tree_sitter::Node::parent(self)
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        tree_sitter::Node::children(self, &mut cursor).collect()
    }

    fn child_by_field(&self, field: &str) -> Option<Self> {
        self.child_by_field_name(field)
    }
}

/// Text covered by a node, decoded lossily.
///
/// Spans that fall outside the buffer yield an empty string.
pub fn node_text<N: SyntaxNode>(node: N, source: &[u8]) -> String {
    byte_range_text(source, node.start_byte(), node.end_byte())
}

/// Text of `source[start..end]`, decoded lossily.
pub fn byte_range_text(source: &[u8], start: usize, end: usize) -> String {
    source
        .get(start..end)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default()
}

/// First node, in pre-order, whose kind is one of `kinds`.
///
/// The search includes `node` itself. `kinds` is a set, not a sequence of
/// passes: the earliest node in document order wins regardless of which
/// entry it matched.
pub fn find_first<N: SyntaxNode>(node: N, kinds: &[&str]) -> Option<N> {
    find_first_pruned(node, kinds, &[])
}

/// Like [`find_first`], but never descends into nodes whose kind is in
/// `prune` (the pruned node itself may still match).
pub fn find_first_pruned<N: SyntaxNode>(node: N, kinds: &[&str], prune: &[&str]) -> Option<N> {
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        let kind = current.kind();
        if kinds.iter().any(|k| *k == kind) {
            return Some(current);
        }
        if prune.iter().any(|k| *k == kind) {
            continue;
        }
        stack.extend(current.children().into_iter().rev());
    }

    None
}
