//! Operation arguments, state payloads, and the uniform result contract.
//!
//! Arguments arrive from the tool dispatcher as camelCase JSON; state
//! payloads are handed back the same way. Every operation returns an
//! [`Outcome`]: success with a human-readable summary and a typed state
//! payload, or failure with a summary and the underlying [`EngineError`].
//! Operations never return a bare `Err`; the outcome is the boundary.

use pagetree::NodeSpec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::EngineError;

// ── Result contract ───────────────────────────────────────────────────────

/// The uniform result of every public engine operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome<S> {
    pub success: bool,
    /// Human-readable summary of what happened (or why it failed).
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EngineError>,
}

impl<S> Outcome<S> {
    pub fn ok(content: impl Into<String>, state: S) -> Self {
        Self {
            success: true,
            content: content.into(),
            state: Some(state),
            error: None,
        }
    }

    pub fn fail(content: impl Into<String>, error: EngineError) -> Self {
        Self {
            success: false,
            content: content.into(),
            state: None,
            error: Some(error),
        }
    }

    /// Failure shape for contract members that exist but are not built yet:
    /// unlike [`Outcome::fail`] it still carries a (partially-populated)
    /// state payload, so callers can tell "not supported yet" apart from a
    /// generic error.
    pub fn not_implemented(operation: &'static str, content: impl Into<String>, state: S) -> Self {
        Self {
            success: false,
            content: content.into(),
            state: Some(state),
            error: Some(EngineError::NotImplemented(operation)),
        }
    }
}

/// Where a created node lands relative to its reference node: as a sibling
/// (`before`/`after`) or as the reference's own first/last child
/// (`prepend`/`append`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    Before,
    #[default]
    After,
    Prepend,
    Append,
}

impl InsertPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            InsertPosition::Before => "before",
            InsertPosition::After => "after",
            InsertPosition::Prepend => "prepend",
            InsertPosition::Append => "append",
        }
    }
}

// ── Node CRUD ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateNodeArgs {
    #[serde(flatten)]
    pub spec: NodeSpec,
    pub reference_node_id: Option<String>,
    pub position: Option<InsertPosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNodeState {
    pub created_node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateNodeArgs {
    pub node_id: String,
    pub content: Option<String>,
    pub children: Option<String>,
    pub attributes: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNodeState {
    pub updated_node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteNodeArgs {
    pub node_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNodeState {
    pub deleted_node_id: String,
}

// ── Table structure ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsertTableRowArgs {
    pub table_id: String,
    pub cells: Option<Vec<String>>,
    pub reference_row_id: Option<String>,
    pub position: Option<InsertPosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTableRowState {
    pub new_row_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsertTableColumnArgs {
    pub table_id: String,
    /// `-1` appends after the last existing column.
    pub column_index: i64,
    pub cells: Option<Vec<String>>,
    pub header_content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTableColumnState {
    pub column_index: usize,
    pub new_cell_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteTableRowArgs {
    pub row_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTableRowState {
    pub deleted_row_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteTableColumnArgs {
    pub table_id: String,
    pub column_index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTableColumnState {
    pub column_index: usize,
    pub deleted_cell_ids: Vec<String>,
}

// ── Stub surface ──────────────────────────────────────────────────────────
//
// Contract members that are discoverable but not built: each operation
// returns a not-implemented outcome with its state partially populated from
// the arguments.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MoveNodeArgs {
    pub node_id: String,
    pub target_id: Option<String>,
    pub position: Option<InsertPosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveNodeState {
    pub moved_node_id: String,
    pub new_position: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DuplicateNodeArgs {
    pub node_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateNodeState {
    pub new_node_id: String,
    pub original_node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatchUpdateArgs {
    pub node_ids: Vec<String>,
    pub content: Option<String>,
    pub attributes: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateState {
    pub updated_node_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplaceTextArgs {
    pub search_text: String,
    pub new_text: String,
    pub use_regex: Option<bool>,
    pub replace_all: Option<bool>,
    pub node_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceTextState {
    pub replacement_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeNodesArgs {
    pub node_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeNodesState {
    pub merged_node_id: String,
    pub removed_node_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitNodeArgs {
    pub node_id: String,
    pub offset: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitNodeState {
    pub new_node_ids: Vec<String>,
    pub original_node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnwrapNodeArgs {
    pub node_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnwrapNodeState {
    pub child_node_ids: Vec<String>,
    pub removed_node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WrapNodesArgs {
    pub node_ids: Vec<String>,
    pub wrapper_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapNodesState {
    pub wrapped_node_ids: Vec<String>,
    pub wrapper_node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropImageArgs {
    pub node_id: String,
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropImageState {
    pub node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizeImageArgs {
    pub node_id: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeImageState {
    pub new_height: u32,
    pub new_width: u32,
    pub node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RotateImageArgs {
    pub node_id: String,
    pub angle: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotateImageState {
    pub new_angle: f64,
    pub node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetImageAltArgs {
    pub node_id: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetImageAltState {
    pub node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertToListArgs {
    pub node_ids: Vec<String>,
    pub list_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertToListState {
    pub list_id: String,
    pub node_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndentListItemArgs {
    pub node_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndentListItemState {
    pub new_parent_id: String,
    pub node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutdentListItemArgs {
    pub node_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutdentListItemState {
    pub new_parent_id: String,
    pub node_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleListTypeArgs {
    pub list_id: String,
    pub target_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleListTypeState {
    pub list_id: String,
    pub new_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveSnapshotArgs {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSnapshotState {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListSnapshotsArgs {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSnapshotsState {
    pub snapshots: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RestoreSnapshotArgs {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSnapshotState {
    pub restored_snapshot_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompareSnapshotsArgs {
    pub from_snapshot_id: String,
    pub to_snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareSnapshotsState {
    pub additions: Vec<String>,
    pub deletions: Vec<String>,
    pub modifications: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteSnapshotArgs {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSnapshotState {
    pub deleted_snapshot_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_args_deserialize_from_dispatcher_json() {
        let args: CreateNodeArgs = serde_json::from_value(json!({
            "type": "p",
            "content": "Hello",
            "referenceNodeId": "node_0",
            "position": "before"
        }))
        .unwrap();
        assert_eq!(args.spec.node_type, "p");
        assert_eq!(args.reference_node_id.as_deref(), Some("node_0"));
        assert_eq!(args.position, Some(InsertPosition::Before));
    }

    #[test]
    fn position_defaults_to_after() {
        assert_eq!(InsertPosition::default(), InsertPosition::After);
        let args: CreateNodeArgs = serde_json::from_value(json!({"type": "p"})).unwrap();
        assert_eq!(args.position, None);
    }

    #[test]
    fn success_outcome_serializes_without_error_field() {
        let outcome = Outcome::ok(
            "done",
            CreateNodeState {
                created_node_id: "node_2".into(),
            },
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], json!(true));
        assert_eq!(json["state"]["createdNodeId"], json!("node_2"));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_outcome_carries_the_error() {
        let outcome: Outcome<DeleteNodeState> = Outcome::fail(
            "Failed to delete node: node node_9 not found",
            EngineError::NodeNotFound("node_9".into()),
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], json!(false));
        assert!(json.get("state").is_none());
        assert_eq!(json["error"], json!("node node_9 not found"));
    }

    #[test]
    fn not_implemented_outcome_keeps_partial_state() {
        let outcome = Outcome::not_implemented(
            "node move",
            "Node move not yet implemented",
            MoveNodeState {
                moved_node_id: "node_1".into(),
                new_position: String::new(),
            },
        );
        assert!(!outcome.success);
        assert_eq!(outcome.state.unwrap().moved_node_id, "node_1");
        assert_eq!(outcome.error, Some(EngineError::NotImplemented("node move")));
    }

    #[test]
    fn column_args_accept_negative_one() {
        let args: InsertTableColumnArgs = serde_json::from_value(json!({
            "tableId": "node_0",
            "columnIndex": -1
        }))
        .unwrap();
        assert_eq!(args.column_index, -1);
    }
}
