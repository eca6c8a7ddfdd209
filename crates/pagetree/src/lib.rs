//! pagetree — the document tree model.
//!
//! A document is a rooted, ordered tree of element and text nodes, the
//! in-memory representation a page-editing agent mutates. This crate owns:
//!
//! - the closed [`NodeKind`] enumeration and the fixed tag → kind mapping
//!   ([`kind_for_tag`]) from the loose HTML-like input vocabulary;
//! - the [`Node`]/[`DocumentTree`] model with path-based descent;
//! - declarative node construction ([`build_node`] from a [`NodeSpec`]);
//! - the minimal table-fragment decoder ([`decode_fragment`]);
//! - the JSON codec used at the host-session boundary.

pub mod build;
pub mod codec;
pub mod fragment;
pub mod kind;
pub mod node;

pub use build::{build_node, NodeSpec};
pub use codec::CodecError;
pub use fragment::{contains_table_markup, decode_fragment};
pub use kind::{is_heading_tag, kind_for_tag, NodeKind};
pub use node::{DocumentTree, ElementNode, Node, TextNode};
