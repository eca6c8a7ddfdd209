//! Path-based node identifiers.
//!
//! A node in a document tree is addressed by its *path*: the sequence of
//! child indices walked from the implicit root. The path is encoded as a
//! stable string identifier with a `node_` prefix, e.g. `[0, 1, 2]` ⇄
//! `"node_0_1_2"`. The empty path denotes the root itself, which is never
//! addressable by identifier.
//!
//! # Example
//!
//! ```
//! use pagetree_node_id::{format_node_id, parse_node_id};
//!
//! let id = format_node_id(&[0, 1, 2]);
//! assert_eq!(id, "node_0_1_2");
//! assert_eq!(parse_node_id(&id).unwrap(), vec![0, 1, 2]);
//!
//! // Malformed identifiers are rejected, never coerced.
//! assert!(parse_node_id("node_").is_err());
//! assert!(parse_node_id("0_1_2").is_err());
//! ```

use thiserror::Error;

/// A single step in a node path: a child index at one tree depth.
pub type PathStep = usize;

/// A node path: child indices from the implicit root.
pub type NodePath = Vec<PathStep>;

/// The identifier prefix shared by every node id.
pub const NODE_ID_PREFIX: &str = "node_";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeIdError {
    #[error("invalid node id {0:?}: expected format node_0_1_2")]
    MissingPrefix(String),
    #[error("invalid node id {0:?}: empty path suffix")]
    EmptySuffix(String),
    #[error("invalid node id {0:?}: {1:?} is not a child index")]
    InvalidSegment(String, String),
    #[error("root path has no parent")]
    NoParent,
}

/// Format a node path as its string identifier.
///
/// Total over all paths, including the empty one (which formats as the bare
/// prefix `"node_"`, an identifier [`parse_node_id`] will refuse, since the
/// root is not addressable).
///
/// # Example
///
/// ```
/// use pagetree_node_id::format_node_id;
///
/// assert_eq!(format_node_id(&[3]), "node_3");
/// assert_eq!(format_node_id(&[0, 7]), "node_0_7");
/// assert_eq!(format_node_id(&[]), "node_");
/// ```
pub fn format_node_id(path: &[PathStep]) -> String {
    let mut out = String::from(NODE_ID_PREFIX);
    for (i, step) in path.iter().enumerate() {
        if i > 0 {
            out.push('_');
        }
        out.push_str(&step.to_string());
    }
    out
}

/// Parse a string identifier into a node path.
///
/// # Errors
///
/// - [`NodeIdError::MissingPrefix`] - the string does not start with `node_`
/// - [`NodeIdError::EmptySuffix`] - nothing follows the prefix
/// - [`NodeIdError::InvalidSegment`] - a segment is not a non-negative integer
///
/// # Example
///
/// ```
/// use pagetree_node_id::parse_node_id;
///
/// assert_eq!(parse_node_id("node_0").unwrap(), vec![0]);
/// assert_eq!(parse_node_id("node_4_0_12").unwrap(), vec![4, 0, 12]);
/// assert!(parse_node_id("node_x").is_err());
/// ```
pub fn parse_node_id(id: &str) -> Result<NodePath, NodeIdError> {
    let suffix = id
        .strip_prefix(NODE_ID_PREFIX)
        .ok_or_else(|| NodeIdError::MissingPrefix(id.to_string()))?;
    if suffix.trim().is_empty() {
        return Err(NodeIdError::EmptySuffix(id.to_string()));
    }
    suffix
        .split('_')
        .map(|segment| {
            segment
                .parse::<PathStep>()
                .map_err(|_| NodeIdError::InvalidSegment(id.to_string(), segment.to_string()))
        })
        .collect()
}

/// Check if a path addresses the implicit root.
///
/// # Example
///
/// ```
/// use pagetree_node_id::is_root;
///
/// assert!(is_root(&[]));
/// assert!(!is_root(&[0]));
/// ```
pub fn is_root(path: &[PathStep]) -> bool {
    path.is_empty()
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`NodeIdError::NoParent`] for the root (empty) path.
///
/// # Example
///
/// ```
/// use pagetree_node_id::parent;
///
/// assert_eq!(parent(&[0, 1, 2]).unwrap(), vec![0, 1]);
/// assert_eq!(parent(&[5]).unwrap(), Vec::<usize>::new());
/// assert!(parent(&[]).is_err());
/// ```
pub fn parent(path: &[PathStep]) -> Result<NodePath, NodeIdError> {
    if path.is_empty() {
        return Err(NodeIdError::NoParent);
    }
    Ok(path[..path.len() - 1].to_vec())
}

/// Split a path into its parent slice and final child index.
///
/// Returns `None` for the root (empty) path.
///
/// # Example
///
/// ```
/// use pagetree_node_id::split_last;
///
/// assert_eq!(split_last(&[0, 1, 2]), Some((&[0usize, 1][..], 2)));
/// assert_eq!(split_last(&[]), None);
/// ```
pub fn split_last(path: &[PathStep]) -> Option<(&[PathStep], PathStep)> {
    match path.split_last() {
        Some((last, init)) => Some((init, *last)),
        None => None,
    }
}
