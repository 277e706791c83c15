//! Hand-built syntax trees for unit tests.
//!
//! tree-sitter recovers from almost any input, so some shapes the extractor
//! must tolerate (a function definition with no declarator at all, say)
//! cannot be produced on demand from source text. These trees can.

use tree_sitter::Point;

use super::SyntaxNode;

struct MockData {
    kind: &'static str,
    field: Option<&'static str>,
    start: usize,
    end: usize,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Arena of nodes over a fixed source string.
pub struct MockTree {
    source: String,
    nodes: Vec<MockData>,
}

impl MockTree {
    /// New tree whose root is a `translation_unit` spanning all of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            nodes: vec![MockData {
                kind: "translation_unit",
                field: None,
                start: 0,
                end: source.len(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> usize {
        0
    }

    pub fn source(&self) -> &[u8] {
        self.source.as_bytes()
    }

    /// Append a child to `parent`; returns its id.
    pub fn add(&mut self, parent: usize, kind: &'static str, start: usize, end: usize) -> usize {
        self.insert(parent, kind, None, start, end)
    }

    /// Append a child stored under a grammar field.
    pub fn add_field(
        &mut self,
        parent: usize,
        field: &'static str,
        kind: &'static str,
        start: usize,
        end: usize,
    ) -> usize {
        self.insert(parent, kind, Some(field), start, end)
    }

    /// Append a child covering the first occurrence of `text` at or after
    /// `parent`'s start.
    pub fn add_text(&mut self, parent: usize, kind: &'static str, text: &str) -> usize {
        let (start, end) = self.locate(parent, text);
        self.add(parent, kind, start, end)
    }

    /// Field variant of [`MockTree::add_text`].
    pub fn add_field_text(
        &mut self,
        parent: usize,
        field: &'static str,
        kind: &'static str,
        text: &str,
    ) -> usize {
        let (start, end) = self.locate(parent, text);
        self.add_field(parent, field, kind, start, end)
    }

    pub fn node(&self, id: usize) -> MockNode<'_> {
        MockNode { tree: self, id }
    }

    fn locate(&self, parent: usize, text: &str) -> (usize, usize) {
        let from = self.nodes[parent].start;
        let offset = self.source[from..]
            .find(text)
            .unwrap_or_else(|| panic!("{:?} not found in mock source", text));
        (from + offset, from + offset + text.len())
    }

    fn insert(
        &mut self,
        parent: usize,
        kind: &'static str,
        field: Option<&'static str>,
        start: usize,
        end: usize,
    ) -> usize {
        let id = self.nodes.len();
        self.nodes.push(MockData {
            kind,
            field,
            start,
            end,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    fn point(&self, byte: usize) -> Point {
        let before = &self.source.as_bytes()[..byte.min(self.source.len())];
        let row = before.iter().filter(|b| **b == b'\n').count();
        let column = before.iter().rev().take_while(|b| **b != b'\n').count();
        Point::new(row, column)
    }
}

#[derive(Clone, Copy)]
pub struct MockNode<'t> {
    tree: &'t MockTree,
    id: usize,
}

impl<'t> MockNode<'t> {
    fn data(&self) -> &'t MockData {
        &self.tree.nodes[self.id]
    }
}

impl SyntaxNode for MockNode<'_> {
    fn kind(&self) -> &str {
        self.data().kind
    }

    fn start_byte(&self) -> usize {
        self.data().start
    }

    fn end_byte(&self) -> usize {
        self.data().end
    }

    fn start_position(&self) -> Point {
        self.tree.point(self.data().start)
    }

    fn end_position(&self) -> Point {
        self.tree.point(self.data().end)
    }

    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| self.tree.node(id))
    }

    fn children(&self) -> Vec<Self> {
        self.data()
            .children
            .iter()
            .map(|id| self.tree.node(*id))
            .collect()
    }

    fn child_by_field(&self, field: &str) -> Option<Self> {
        self.data()
            .children
            .iter()
            .find(|id| self.tree.nodes[**id].field == Some(field))
            .map(|id| self.tree.node(*id))
    }
}
