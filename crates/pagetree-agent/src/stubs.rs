//! Contract members that exist but are not built.
//!
//! These operations are part of the discoverable tool surface so callers
//! can distinguish "not supported yet" from a generic failure: each returns
//! a not-implemented outcome carrying a partially-populated state payload,
//! and none of them touches the document.

use crate::runtime::PageAgentRuntime;
use crate::session::DocumentSession;
use crate::types::{
    BatchUpdateArgs, BatchUpdateState, CompareSnapshotsArgs, CompareSnapshotsState,
    ConvertToListArgs, ConvertToListState, CropImageArgs, CropImageState, DeleteSnapshotArgs,
    DeleteSnapshotState, DuplicateNodeArgs, DuplicateNodeState, IndentListItemArgs,
    IndentListItemState, ListSnapshotsArgs, ListSnapshotsState, MergeNodesArgs, MergeNodesState,
    MoveNodeArgs, MoveNodeState, Outcome, OutdentListItemArgs, OutdentListItemState,
    ReplaceTextArgs, ReplaceTextState, ResizeImageArgs, ResizeImageState, RestoreSnapshotArgs,
    RestoreSnapshotState, RotateImageArgs, RotateImageState, SaveSnapshotArgs, SaveSnapshotState,
    SetImageAltArgs, SetImageAltState, SplitNodeArgs, SplitNodeState, ToggleListTypeArgs,
    ToggleListTypeState, UnwrapNodeArgs, UnwrapNodeState, WrapNodesArgs, WrapNodesState,
};

impl<S: DocumentSession> PageAgentRuntime<S> {
    pub fn move_node(&self, args: &MoveNodeArgs) -> Outcome<MoveNodeState> {
        Outcome::not_implemented(
            "node move",
            "Node move not yet implemented",
            MoveNodeState {
                moved_node_id: args.node_id.clone(),
                new_position: String::new(),
            },
        )
    }

    pub fn duplicate_node(&self, args: &DuplicateNodeArgs) -> Outcome<DuplicateNodeState> {
        Outcome::not_implemented(
            "node duplication",
            "Node duplication not yet implemented",
            DuplicateNodeState {
                new_node_id: String::new(),
                original_node_id: args.node_id.clone(),
            },
        )
    }

    pub fn batch_update(&self, args: &BatchUpdateArgs) -> Outcome<BatchUpdateState> {
        Outcome::not_implemented(
            "batch update",
            "Batch update not yet implemented",
            BatchUpdateState {
                updated_node_ids: args.node_ids.clone(),
            },
        )
    }

    pub fn replace_text(&self, _args: &ReplaceTextArgs) -> Outcome<ReplaceTextState> {
        Outcome::not_implemented(
            "text replacement",
            "Text replacement not yet implemented",
            ReplaceTextState {
                replacement_count: 0,
            },
        )
    }

    pub fn merge_nodes(&self, _args: &MergeNodesArgs) -> Outcome<MergeNodesState> {
        Outcome::not_implemented(
            "node merging",
            "Node merging not yet implemented",
            MergeNodesState {
                merged_node_id: String::new(),
                removed_node_ids: Vec::new(),
            },
        )
    }

    pub fn split_node(&self, args: &SplitNodeArgs) -> Outcome<SplitNodeState> {
        Outcome::not_implemented(
            "node splitting",
            "Node splitting not yet implemented",
            SplitNodeState {
                new_node_ids: vec![String::new(), String::new()],
                original_node_id: args.node_id.clone(),
            },
        )
    }

    pub fn unwrap_node(&self, args: &UnwrapNodeArgs) -> Outcome<UnwrapNodeState> {
        Outcome::not_implemented(
            "node unwrapping",
            "Node unwrapping not yet implemented",
            UnwrapNodeState {
                child_node_ids: Vec::new(),
                removed_node_id: args.node_id.clone(),
            },
        )
    }

    pub fn wrap_nodes(&self, args: &WrapNodesArgs) -> Outcome<WrapNodesState> {
        Outcome::not_implemented(
            "node wrapping",
            "Node wrapping not yet implemented",
            WrapNodesState {
                wrapped_node_ids: args.node_ids.clone(),
                wrapper_node_id: String::new(),
            },
        )
    }

    pub fn crop_image(&self, args: &CropImageArgs) -> Outcome<CropImageState> {
        Outcome::not_implemented(
            "image cropping",
            "Image cropping not yet implemented",
            CropImageState {
                node_id: args.node_id.clone(),
            },
        )
    }

    pub fn resize_image(&self, args: &ResizeImageArgs) -> Outcome<ResizeImageState> {
        Outcome::not_implemented(
            "image resizing",
            "Image resizing not yet implemented",
            ResizeImageState {
                new_height: 0,
                new_width: 0,
                node_id: args.node_id.clone(),
            },
        )
    }

    pub fn rotate_image(&self, args: &RotateImageArgs) -> Outcome<RotateImageState> {
        Outcome::not_implemented(
            "image rotation",
            "Image rotation not yet implemented",
            RotateImageState {
                new_angle: args.angle,
                node_id: args.node_id.clone(),
            },
        )
    }

    pub fn set_image_alt(&self, args: &SetImageAltArgs) -> Outcome<SetImageAltState> {
        Outcome::not_implemented(
            "image alt text setting",
            "Image alt text setting not yet implemented",
            SetImageAltState {
                node_id: args.node_id.clone(),
            },
        )
    }

    pub fn convert_to_list(&self, args: &ConvertToListArgs) -> Outcome<ConvertToListState> {
        Outcome::not_implemented(
            "list conversion",
            "List conversion not yet implemented",
            ConvertToListState {
                list_id: String::new(),
                node_ids: args.node_ids.clone(),
            },
        )
    }

    pub fn indent_list_item(&self, args: &IndentListItemArgs) -> Outcome<IndentListItemState> {
        Outcome::not_implemented(
            "list item indentation",
            "List item indentation not yet implemented",
            IndentListItemState {
                new_parent_id: String::new(),
                node_id: args.node_id.clone(),
            },
        )
    }

    pub fn outdent_list_item(&self, args: &OutdentListItemArgs) -> Outcome<OutdentListItemState> {
        Outcome::not_implemented(
            "list item outdentation",
            "List item outdentation not yet implemented",
            OutdentListItemState {
                new_parent_id: String::new(),
                node_id: args.node_id.clone(),
            },
        )
    }

    pub fn toggle_list_type(&self, args: &ToggleListTypeArgs) -> Outcome<ToggleListTypeState> {
        Outcome::not_implemented(
            "list type toggling",
            "List type toggling not yet implemented",
            ToggleListTypeState {
                list_id: args.list_id.clone(),
                new_type: args.target_type.clone(),
            },
        )
    }

    pub fn save_snapshot(&self, _args: &SaveSnapshotArgs) -> Outcome<SaveSnapshotState> {
        Outcome::not_implemented(
            "snapshot saving",
            "Snapshot saving not yet implemented",
            SaveSnapshotState {
                snapshot_id: String::new(),
            },
        )
    }

    pub fn list_snapshots(&self, _args: &ListSnapshotsArgs) -> Outcome<ListSnapshotsState> {
        Outcome::not_implemented(
            "snapshot listing",
            "Snapshot listing not yet implemented",
            ListSnapshotsState {
                snapshots: Vec::new(),
                total: 0,
            },
        )
    }

    pub fn restore_snapshot(&self, args: &RestoreSnapshotArgs) -> Outcome<RestoreSnapshotState> {
        Outcome::not_implemented(
            "snapshot restoration",
            "Snapshot restoration not yet implemented",
            RestoreSnapshotState {
                restored_snapshot_id: args.snapshot_id.clone(),
            },
        )
    }

    pub fn compare_snapshots(&self, _args: &CompareSnapshotsArgs) -> Outcome<CompareSnapshotsState> {
        Outcome::not_implemented(
            "snapshot comparison",
            "Snapshot comparison not yet implemented",
            CompareSnapshotsState {
                additions: Vec::new(),
                deletions: Vec::new(),
                modifications: Vec::new(),
            },
        )
    }

    pub fn delete_snapshot(&self, args: &DeleteSnapshotArgs) -> Outcome<DeleteSnapshotState> {
        Outcome::not_implemented(
            "snapshot deletion",
            "Snapshot deletion not yet implemented",
            DeleteSnapshotState {
                deleted_snapshot_id: args.snapshot_id.clone(),
            },
        )
    }
}
