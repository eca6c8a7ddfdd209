//! The page-agent runtime: node create / update / delete.
//!
//! Every public operation follows the same shape: fetch the full tree from
//! the session, resolve the target by path, mutate the working copy, commit
//! the whole tree back, and report an [`Outcome`]. An error anywhere drops
//! the working copy; the session never sees a partial mutation.
//!
//! Node identifiers are positional path snapshots, so any structural change
//! invalidates ids issued for unrelated nodes. Stable identity across calls
//! is a non-goal: callers are expected to re-read the document and derive
//! fresh ids before every operation.

use pagetree::{build_node, DocumentTree, Node};
use pagetree_node_id::{format_node_id, parse_node_id, split_last};
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::session::DocumentSession;
use crate::types::{
    CreateNodeArgs, CreateNodeState, DeleteNodeArgs, DeleteNodeState, InsertPosition, Outcome,
    UpdateNodeArgs, UpdateNodeState,
};

/// The mutation engine. Holds at most one attached [`DocumentSession`] and
/// no document state of its own.
#[derive(Debug, Default)]
pub struct PageAgentRuntime<S> {
    session: Option<S>,
}

impl<S: DocumentSession> PageAgentRuntime<S> {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn with_session(session: S) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// Attach or detach the document session.
    pub fn set_session(&mut self, session: Option<S>) {
        self.session = session;
    }

    pub fn session(&self) -> Option<&S> {
        self.session.as_ref()
    }

    pub(crate) fn session_mut(&mut self) -> Result<&mut S, EngineError> {
        self.session.as_mut().ok_or(EngineError::NotInitialized)
    }

    // ── Node CRUD ─────────────────────────────────────────────────────────

    /// Create a node, either appended at the document root or positioned
    /// relative to a reference node. `before`/`after` insert among the
    /// reference's siblings; `prepend`/`append` insert into the reference's
    /// own children.
    pub fn create_node(&mut self, args: &CreateNodeArgs) -> Outcome<CreateNodeState> {
        debug!(node_type = %args.spec.node_type, "create_node");
        self.try_create_node(args).unwrap_or_else(|err| {
            warn!(%err, "create_node failed");
            Outcome::fail(format!("Failed to create node: {err}"), err)
        })
    }

    fn try_create_node(
        &mut self,
        args: &CreateNodeArgs,
    ) -> Result<Outcome<CreateNodeState>, EngineError> {
        let session = self.session_mut()?;
        let mut tree = session.fetch_tree()?;
        let new_node = build_node(&args.spec);
        let position = args.position.unwrap_or_default();

        let parent_path = match &args.reference_node_id {
            Some(reference_id) => {
                let ref_path = parse_node_id(reference_id)?;
                if tree.node_at(&ref_path).is_none() {
                    return Err(EngineError::NodeNotFound(reference_id.clone()));
                }
                let (parent, index) = match split_last(&ref_path) {
                    Some(pair) => pair,
                    None => return Err(EngineError::NodeNotFound(reference_id.clone())),
                };
                match position {
                    InsertPosition::Before | InsertPosition::After => {
                        let siblings = tree
                            .children_at_mut(parent)
                            .ok_or_else(|| EngineError::NodeNotFound(reference_id.clone()))?;
                        let at = match position {
                            InsertPosition::Before => index,
                            _ => index + 1,
                        }
                        .min(siblings.len());
                        siblings.insert(at, new_node);
                    }
                    InsertPosition::Prepend | InsertPosition::Append => {
                        let children = tree
                            .node_at_mut(&ref_path)
                            .ok_or_else(|| EngineError::NodeNotFound(reference_id.clone()))?
                            .children_mut()
                            .ok_or_else(|| EngineError::NotAnElement(reference_id.clone()))?;
                        match position {
                            InsertPosition::Prepend => children.insert(0, new_node),
                            _ => children.push(new_node),
                        }
                    }
                }
                parent.to_vec()
            }
            None => {
                tree.root.children.push(new_node);
                Vec::new()
            }
        };

        // The reported id follows the root-append formula for every
        // position keyword; for prepend/append (and non-root before/after)
        // it does not address the node's actual nested location.
        let mut reported = parent_path;
        reported.push(tree.root.children.len() - 1);
        let created_node_id = format_node_id(&reported);

        session.commit_tree(&tree)?;

        let location = match &args.reference_node_id {
            Some(reference_id) => format!(" {} node {}", position.as_str(), reference_id),
            None => " at document root".to_string(),
        };
        Ok(Outcome::ok(
            format!(
                "Successfully created {} node{}.",
                args.spec.node_type, location
            ),
            CreateNodeState { created_node_id },
        ))
    }

    /// Update a node's content, raw children, and/or attributes.
    pub fn update_node(&mut self, args: &UpdateNodeArgs) -> Outcome<UpdateNodeState> {
        debug!(node_id = %args.node_id, "update_node");
        self.try_update_node(args).unwrap_or_else(|err| {
            warn!(%err, "update_node failed");
            Outcome::fail(format!("Failed to update node: {err}"), err)
        })
    }

    fn try_update_node(
        &mut self,
        args: &UpdateNodeArgs,
    ) -> Result<Outcome<UpdateNodeState>, EngineError> {
        let session = self.session_mut()?;
        let mut tree = session.fetch_tree()?;
        let path = parse_node_id(&args.node_id)?;
        let node = tree
            .node_at_mut(&path)
            .ok_or_else(|| EngineError::NodeNotFound(args.node_id.clone()))?;

        if let Some(content) = &args.content {
            match node {
                Node::Text(leaf) => leaf.text = content.clone(),
                // Destructive: the element's existing children are replaced
                // wholesale by one text leaf.
                Node::Element(el) => el.children = vec![Node::text(content.clone())],
            }
        }

        if let Some(children) = &args.children {
            // Raw children land verbatim as a single text leaf; this path
            // never decodes markup. A text leaf has no children slot and is
            // left untouched.
            if let Some(slot) = node.children_mut() {
                *slot = vec![Node::text(children.clone())];
            }
        }

        if let Some(attributes) = &args.attributes {
            let attrs = node.attrs_mut();
            for (key, value) in attributes {
                if value.is_null() {
                    attrs.remove(key);
                } else {
                    attrs.insert(key.clone(), value.clone());
                }
            }
        }

        session.commit_tree(&tree)?;
        Ok(Outcome::ok(
            format!("Successfully updated node {}.", args.node_id),
            UpdateNodeState {
                updated_node_id: args.node_id.clone(),
            },
        ))
    }

    /// Delete a node from its parent's children.
    pub fn delete_node(&mut self, args: &DeleteNodeArgs) -> Outcome<DeleteNodeState> {
        debug!(node_id = %args.node_id, "delete_node");
        self.try_delete_node(args).unwrap_or_else(|err| {
            warn!(%err, "delete_node failed");
            Outcome::fail(format!("Failed to delete node: {err}"), err)
        })
    }

    fn try_delete_node(
        &mut self,
        args: &DeleteNodeArgs,
    ) -> Result<Outcome<DeleteNodeState>, EngineError> {
        let session = self.session_mut()?;
        let mut tree = session.fetch_tree()?;
        let path = parse_node_id(&args.node_id)?;
        let removed = remove_at(&mut tree, &path, &args.node_id)?;
        session.commit_tree(&tree)?;
        Ok(Outcome::ok(
            format!(
                "Successfully deleted {} node {}.",
                removed.kind_name(),
                args.node_id
            ),
            DeleteNodeState {
                deleted_node_id: args.node_id.clone(),
            },
        ))
    }
}

/// Remove the node at `path` from its parent's children, returning it.
///
/// The empty path is the root, which is never deletable.
pub(crate) fn remove_at(
    tree: &mut DocumentTree,
    path: &[usize],
    node_id: &str,
) -> Result<Node, EngineError> {
    let (parent_path, index) = split_last(path).ok_or(EngineError::RootDeletion)?;
    let children = tree
        .children_at_mut(parent_path)
        .ok_or_else(|| EngineError::NodeNotFound(node_id.to_string()))?;
    if index >= children.len() {
        return Err(EngineError::NodeNotFound(node_id.to_string()));
    }
    Ok(children.remove(index))
}
