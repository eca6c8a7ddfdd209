//! Tree ⇄ JSON codec.
//!
//! The host session exchanges whole documents as JSON values shaped like
//! `{"root": {"type": "root", "children": [...]}}`, where each node carries
//! its kind in `type`, text leaves carry `text`, headings carry `tag`, and
//! any other fields are host attributes. Encoding and decoding are written
//! by hand so unrecognized fields survive a round-trip untouched.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::kind::NodeKind;
use crate::node::{DocumentTree, ElementNode, Node, TextNode};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("node is missing a `type` field")]
    MissingKind,
    #[error("node `type` must be a string")]
    InvalidKind,
    #[error("node `text` must be a string")]
    InvalidText,
    #[error("node `children` must be an array")]
    InvalidChildren,
    #[error("document is missing a `root` element")]
    MissingRoot,
}

impl Node {
    /// Decode a node from its JSON value.
    pub fn from_value(value: &Value) -> Result<Node, CodecError> {
        let obj = value.as_object().ok_or(CodecError::NotAnObject)?;
        let kind_field = obj.get("type").ok_or(CodecError::MissingKind)?;
        let kind_name = kind_field.as_str().ok_or(CodecError::InvalidKind)?;

        if kind_name == "text" {
            let text = match obj.get("text") {
                None => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(_) => return Err(CodecError::InvalidText),
            };
            let mut attrs = Map::new();
            for (key, val) in obj {
                if key != "type" && key != "text" {
                    attrs.insert(key.clone(), val.clone());
                }
            }
            return Ok(Node::Text(TextNode { text, attrs }));
        }

        let kind = NodeKind::from_str(kind_name);
        let tag = match obj.get("tag") {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        };
        let children = match obj.get("children") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(Node::from_value)
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(CodecError::InvalidChildren),
        };
        let mut attrs = Map::new();
        for (key, val) in obj {
            let lifted = key == "type"
                || key == "children"
                || (key == "tag" && tag.is_some());
            if !lifted {
                attrs.insert(key.clone(), val.clone());
            }
        }
        Ok(Node::Element(ElementNode {
            kind,
            tag,
            attrs,
            children,
        }))
    }

    /// Encode this node as its JSON value.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        match self {
            Node::Text(t) => {
                obj.insert("type".into(), Value::String("text".into()));
                obj.insert("text".into(), Value::String(t.text.clone()));
                for (key, val) in &t.attrs {
                    obj.insert(key.clone(), val.clone());
                }
            }
            Node::Element(el) => {
                obj.insert("type".into(), Value::String(el.kind.as_str().to_string()));
                if let Some(tag) = &el.tag {
                    obj.insert("tag".into(), Value::String(tag.clone()));
                }
                obj.insert(
                    "children".into(),
                    Value::Array(el.children.iter().map(Node::to_value).collect()),
                );
                for (key, val) in &el.attrs {
                    obj.insert(key.clone(), val.clone());
                }
            }
        }
        Value::Object(obj)
    }
}

impl DocumentTree {
    /// Decode a whole document from `{"root": ...}`. The root must decode to
    /// an element node.
    pub fn from_value(value: &Value) -> Result<DocumentTree, CodecError> {
        let obj = value.as_object().ok_or(CodecError::NotAnObject)?;
        let root_value = obj.get("root").ok_or(CodecError::MissingRoot)?;
        match Node::from_value(root_value)? {
            Node::Element(root) => Ok(DocumentTree { root }),
            Node::Text(_) => Err(CodecError::MissingRoot),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(
            "root".into(),
            Node::Element(self.root.clone()).to_value(),
        );
        Value::Object(obj)
    }
}

impl Serialize for Node {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Node::from_value(&value).map_err(D::Error::custom)
    }
}

impl Serialize for DocumentTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DocumentTree {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        DocumentTree::from_value(&value).map_err(D::Error::custom)
    }
}
