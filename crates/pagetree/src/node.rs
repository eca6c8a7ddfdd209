//! The document tree: text leaves, element nodes, and path descent.

use serde_json::{Map, Value};

use crate::kind::NodeKind;

/// A text leaf. Has no children; extra host fields ride along in `attrs`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextNode {
    pub text: String,
    pub attrs: Map<String, Value>,
}

/// An element node. `tag` is only meaningful for headings, where it carries
/// the level (`h1`..`h6`).
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub kind: NodeKind,
    pub tag: Option<String>,
    pub attrs: Map<String, Value>,
    pub children: Vec<Node>,
}

impl ElementNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            tag: None,
            attrs: Map::new(),
            children: Vec::new(),
        }
    }

    /// Descend `children[i]` for each step of `path`. Returns `None` when a
    /// step is out of range or descends into a leaf; the empty path has no
    /// descendant.
    pub fn descendant(&self, path: &[usize]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut current = self.children.get(*first)?;
        for step in rest {
            current = current.children()?.get(*step)?;
        }
        Some(current)
    }

    /// Mutable variant of [`ElementNode::descendant`].
    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let (first, rest) = path.split_first()?;
        let mut current = self.children.get_mut(*first)?;
        for step in rest {
            current = current.children_mut()?.get_mut(*step)?;
        }
        Some(current)
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(TextNode),
    Element(ElementNode),
}

impl Node {
    /// A bare text leaf.
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(TextNode {
            text: text.into(),
            attrs: Map::new(),
        })
    }

    /// An element of the given kind with no tag, attributes, or children.
    pub fn element(kind: NodeKind) -> Node {
        Node::Element(ElementNode::new(kind))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::Element(el) => el.kind.clone(),
        }
    }

    /// The wire name of this node's kind, for human-readable summaries.
    pub fn kind_name(&self) -> &str {
        match self {
            Node::Text(_) => "text",
            Node::Element(el) => el.kind.as_str(),
        }
    }

    pub fn is_kind(&self, kind: &NodeKind) -> bool {
        match self {
            Node::Text(_) => *kind == NodeKind::Text,
            Node::Element(el) => el.kind == *kind,
        }
    }

    /// Children of an element; `None` for a text leaf.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Text(_) => None,
            Node::Element(el) => Some(&el.children),
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Text(_) => None,
            Node::Element(el) => Some(&mut el.children),
        }
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextNode> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// The attribute map, present on both node forms.
    pub fn attrs_mut(&mut self) -> &mut Map<String, Value> {
        match self {
            Node::Text(t) => &mut t.attrs,
            Node::Element(el) => &mut el.attrs,
        }
    }
}

/// A whole document: an implicit root element owning the top-level nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTree {
    pub root: ElementNode,
}

impl DocumentTree {
    /// An empty document.
    pub fn new() -> Self {
        Self {
            root: ElementNode::new(NodeKind::Root),
        }
    }

    /// The node at `path`, or `None` if the path does not resolve. The empty
    /// path denotes the root, which is not itself a [`Node`].
    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        self.root.descendant(path)
    }

    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        self.root.descendant_mut(path)
    }

    /// The children list owned by the node at `path`; the empty path yields
    /// the root's children. `None` if the path does not resolve or resolves
    /// to a leaf.
    pub fn children_at(&self, path: &[usize]) -> Option<&[Node]> {
        if path.is_empty() {
            return Some(&self.root.children);
        }
        self.node_at(path)?.children()
    }

    pub fn children_at_mut(&mut self, path: &[usize]) -> Option<&mut Vec<Node>> {
        if path.is_empty() {
            return Some(&mut self.root.children);
        }
        self.node_at_mut(path)?.children_mut()
    }
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}
