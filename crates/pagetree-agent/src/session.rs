//! The document session boundary.
//!
//! The session is the external collaborator that owns the authoritative
//! document. The engine is stateless between calls: each operation fetches
//! the full current tree, mutates a working copy, and commits the whole
//! tree back in one call. Nothing here defends against another mutator
//! committing between fetch and commit; serializing agent edits against
//! live edits is the caller's concern.

use pagetree::{CodecError, DocumentTree};
use serde_json::Value;

use crate::error::SessionError;

/// Whole-tree fetch/commit access to the host document.
pub trait DocumentSession {
    /// The full current tree. Called exactly once per engine operation.
    fn fetch_tree(&self) -> Result<DocumentTree, SessionError>;

    /// Replace the entire document state. Called at most once per engine
    /// operation, only after the working copy mutated cleanly.
    fn commit_tree(&mut self, tree: &DocumentTree) -> Result<(), SessionError>;
}

/// An in-memory session holding a single document tree.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    tree: DocumentTree,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(tree: DocumentTree) -> Self {
        Self { tree }
    }

    /// Build a session from the JSON document shape
    /// (`{"root": {"type": "root", "children": [...]}}`).
    pub fn from_value(value: &Value) -> Result<Self, CodecError> {
        Ok(Self {
            tree: DocumentTree::from_value(value)?,
        })
    }

    pub fn tree(&self) -> &DocumentTree {
        &self.tree
    }

    pub fn to_value(&self) -> Value {
        self.tree.to_value()
    }
}

impl DocumentSession for MemorySession {
    fn fetch_tree(&self) -> Result<DocumentTree, SessionError> {
        Ok(self.tree.clone())
    }

    fn commit_tree(&mut self, tree: &DocumentTree) -> Result<(), SessionError> {
        self.tree = tree.clone();
        Ok(())
    }
}
