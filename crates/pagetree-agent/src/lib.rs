//! pagetree-agent — the page agent's document mutation engine.
//!
//! A library for programmatically editing a rich-text document tree on
//! behalf of an AI page agent: create/update/delete single nodes addressed
//! by path-based identifiers, plus whole-row and whole-column table edits.
//!
//! The engine owns no document. It talks to exactly one collaborator, a
//! [`DocumentSession`], from which every operation fetches the full current
//! tree and to which it commits the mutated tree wholesale: all-or-nothing
//! per call, with no protection against a concurrent mutator between fetch
//! and commit (serializing edits is the caller's job).
//!
//! Every operation returns an [`Outcome`] instead of erroring: a
//! human-readable summary plus either a typed state payload or the
//! underlying [`EngineError`].
//!
//! # Example
//!
//! ```
//! use pagetree_agent::{CreateNodeArgs, MemorySession, PageAgentRuntime};
//! use pagetree::NodeSpec;
//!
//! let mut runtime = PageAgentRuntime::with_session(MemorySession::new());
//! let outcome = runtime.create_node(&CreateNodeArgs {
//!     spec: NodeSpec::new("p").with_content("Hello"),
//!     ..Default::default()
//! });
//! assert!(outcome.success);
//! assert_eq!(outcome.state.unwrap().created_node_id, "node_0");
//! ```

pub mod error;
pub mod runtime;
pub mod session;
pub mod stubs;
pub mod table;
pub mod types;

pub use error::{EngineError, SessionError};
pub use runtime::PageAgentRuntime;
pub use session::{DocumentSession, MemorySession};
pub use types::{
    BatchUpdateArgs, BatchUpdateState, CompareSnapshotsArgs, CompareSnapshotsState,
    ConvertToListArgs, ConvertToListState, CreateNodeArgs, CreateNodeState, CropImageArgs,
    CropImageState, DeleteNodeArgs, DeleteNodeState, DeleteSnapshotArgs, DeleteSnapshotState,
    DeleteTableColumnArgs, DeleteTableColumnState, DeleteTableRowArgs, DeleteTableRowState,
    DuplicateNodeArgs, DuplicateNodeState, IndentListItemArgs, IndentListItemState,
    InsertPosition, InsertTableColumnArgs, InsertTableColumnState, InsertTableRowArgs,
    InsertTableRowState, ListSnapshotsArgs, ListSnapshotsState, MergeNodesArgs, MergeNodesState,
    MoveNodeArgs, MoveNodeState, Outcome, OutdentListItemArgs, OutdentListItemState,
    ReplaceTextArgs, ReplaceTextState, ResizeImageArgs, ResizeImageState, RestoreSnapshotArgs,
    RestoreSnapshotState, RotateImageArgs, RotateImageState, SaveSnapshotArgs, SaveSnapshotState,
    SetImageAltArgs, SetImageAltState, SplitNodeArgs, SplitNodeState, ToggleListTypeArgs,
    ToggleListTypeState, UnwrapNodeArgs, UnwrapNodeState, UpdateNodeArgs, UpdateNodeState,
    WrapNodesArgs, WrapNodesState,
};
