//! Declarative node construction from operation inputs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fragment::{contains_table_markup, decode_fragment};
use crate::kind::{is_heading_tag, kind_for_tag, NodeKind};
use crate::node::{ElementNode, Node, TextNode};

/// The declarative description of a node to create: an input tag plus
/// optional inline content, raw child markup, and attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeSpec {
    #[serde(rename = "type")]
    pub node_type: String,
    pub content: Option<String>,
    pub children: Option<String>,
    pub attributes: Option<Map<String, Value>>,
}

impl NodeSpec {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_children(mut self, children: impl Into<String>) -> Self {
        self.children = Some(children.into());
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Build a tree node from a [`NodeSpec`].
///
/// Text-mapped types produce a leaf carrying `content`. Other types produce
/// an element of the mapped kind: inline `content` becomes a single text
/// leaf; raw `children` markup is decoded when it looks like table row/cell
/// markup and otherwise wrapped verbatim as one text leaf. Attributes are
/// spread onto the node either way.
pub fn build_node(spec: &NodeSpec) -> Node {
    let kind = kind_for_tag(&spec.node_type);
    let attrs = spec.attributes.clone().unwrap_or_default();

    if kind == NodeKind::Text || spec.node_type == "span" {
        return Node::Text(TextNode {
            text: spec.content.clone().unwrap_or_default(),
            attrs,
        });
    }

    let mut element = ElementNode::new(kind);
    if is_heading_tag(&spec.node_type) {
        element.tag = Some(spec.node_type.clone());
    }

    if let Some(content) = non_empty(&spec.content) {
        element.children = vec![Node::text(content)];
    } else if let Some(children) = non_empty(&spec.children) {
        if element.kind == NodeKind::Table || contains_table_markup(children) {
            element.children = decode_fragment(children);
        } else {
            element.children = vec![Node::text(children)];
        }
    }

    element.attrs = attrs;
    Node::Element(element)
}
