//! Error taxonomy for the mutation engine.
//!
//! None of these cross a public operation boundary as a Rust error: every
//! operation catches internally and reports the uniform failure
//! [`Outcome`](crate::types::Outcome) shape, carrying the error for
//! diagnostics.

use pagetree_node_id::NodeIdError;
use serde::Serialize;
use thiserror::Error;

/// Failure reported by the host document session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("document unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// No document session has been attached yet.
    #[error("document session not initialized")]
    NotInitialized,
    #[error(transparent)]
    InvalidNodeId(#[from] NodeIdError),
    #[error("node {0} not found")]
    NodeNotFound(String),
    #[error("table {0} not found")]
    TableNotFound(String),
    #[error("cannot delete the document root")]
    RootDeletion,
    /// The target is a text leaf and cannot hold children.
    #[error("node {0} cannot contain children")]
    NotAnElement(String),
    #[error("table {0} has no rows")]
    EmptyTable(String),
    #[error("{0} not yet implemented")]
    NotImplemented(&'static str),
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

impl Serialize for EngineError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
