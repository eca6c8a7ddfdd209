//! Table structure operations: whole-row and whole-column edits.
//!
//! A table's children are rows; each row's children are cells. Equal cell
//! counts across rows are a soft expectation: row insertion derives its
//! column count from the first existing row to keep new rows aligned, and
//! column deletion skips rows with no cell at the index rather than
//! erroring. Non-row children of a table are skipped by column operations.

use pagetree::{DocumentTree, ElementNode, Node, NodeKind};
use pagetree_node_id::{format_node_id, parse_node_id, split_last, NodePath};
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::runtime::PageAgentRuntime;
use crate::session::DocumentSession;
use crate::types::{
    DeleteTableColumnArgs, DeleteTableColumnState, DeleteTableRowArgs, DeleteTableRowState,
    InsertPosition, InsertTableColumnArgs, InsertTableColumnState, InsertTableRowArgs,
    InsertTableRowState, Outcome,
};

/// A cell with an optional single text leaf.
fn table_cell(content: Option<&str>) -> Node {
    let mut cell = ElementNode::new(NodeKind::TableCell);
    if let Some(text) = content.filter(|s| !s.is_empty()) {
        cell.children = vec![Node::text(text)];
    }
    Node::Element(cell)
}

/// Resolve `table_id` to the path of a table node.
fn table_path(tree: &DocumentTree, table_id: &str) -> Result<NodePath, EngineError> {
    let path = parse_node_id(table_id)?;
    match tree.node_at(&path) {
        Some(node) if node.is_kind(&NodeKind::Table) => Ok(path),
        _ => Err(EngineError::TableNotFound(table_id.to_string())),
    }
}

impl<S: DocumentSession> PageAgentRuntime<S> {
    /// Insert a whole row into a table, appended at the end or positioned
    /// relative to a reference row.
    pub fn insert_table_row(&mut self, args: &InsertTableRowArgs) -> Outcome<InsertTableRowState> {
        debug!(table_id = %args.table_id, "insert_table_row");
        self.try_insert_table_row(args).unwrap_or_else(|err| {
            warn!(%err, "insert_table_row failed");
            Outcome::fail(format!("Failed to insert table row: {err}"), err)
        })
    }

    fn try_insert_table_row(
        &mut self,
        args: &InsertTableRowArgs,
    ) -> Result<Outcome<InsertTableRowState>, EngineError> {
        let session = self.session_mut()?;
        let mut tree = session.fetch_tree()?;
        let path = table_path(&tree, &args.table_id)?;
        let rows = tree
            .children_at_mut(&path)
            .ok_or_else(|| EngineError::TableNotFound(args.table_id.clone()))?;

        // Column count: first existing row wins, then the supplied cells,
        // then a default of 3.
        let first_row_cells = rows
            .first()
            .and_then(|row| row.children())
            .map(|cells| cells.len())
            .unwrap_or(0);
        let supplied = args.cells.as_ref().map(|cells| cells.len()).unwrap_or(0);
        let column_count = if first_row_cells > 0 {
            first_row_cells
        } else if supplied > 0 {
            supplied
        } else {
            3
        };

        let mut row = ElementNode::new(NodeKind::TableRow);
        for i in 0..column_count {
            let content = args
                .cells
                .as_ref()
                .and_then(|cells| cells.get(i))
                .map(String::as_str);
            row.children.push(table_cell(content));
        }

        let mut insert_index = rows.len();
        if let Some(reference_row_id) = &args.reference_row_id {
            // A reference that doesn't name a row of this table falls back
            // to appending at the end.
            if let Ok(ref_path) = parse_node_id(reference_row_id) {
                if let Some((ref_parent, row_index)) = split_last(&ref_path) {
                    if ref_parent == path.as_slice() && row_index < rows.len() {
                        insert_index = match args.position.unwrap_or_default() {
                            InsertPosition::Before => row_index,
                            _ => row_index + 1,
                        };
                    }
                }
            }
        }
        rows.insert(insert_index, Node::Element(row));

        let mut row_path = path.clone();
        row_path.push(insert_index);
        let new_row_id = format_node_id(&row_path);

        session.commit_tree(&tree)?;
        Ok(Outcome::ok(
            format!(
                "Successfully inserted row with {} cells into table {}.",
                column_count, args.table_id
            ),
            InsertTableRowState { new_row_id },
        ))
    }

    /// Insert a column: one new cell in every row of the table.
    pub fn insert_table_column(
        &mut self,
        args: &InsertTableColumnArgs,
    ) -> Outcome<InsertTableColumnState> {
        debug!(table_id = %args.table_id, column_index = args.column_index, "insert_table_column");
        self.try_insert_table_column(args).unwrap_or_else(|err| {
            warn!(%err, "insert_table_column failed");
            Outcome::fail(format!("Failed to insert table column: {err}"), err)
        })
    }

    fn try_insert_table_column(
        &mut self,
        args: &InsertTableColumnArgs,
    ) -> Result<Outcome<InsertTableColumnState>, EngineError> {
        let session = self.session_mut()?;
        let mut tree = session.fetch_tree()?;
        let path = table_path(&tree, &args.table_id)?;
        let rows = tree
            .children_at_mut(&path)
            .ok_or_else(|| EngineError::TableNotFound(args.table_id.clone()))?;
        if rows.is_empty() {
            return Err(EngineError::EmptyTable(args.table_id.clone()));
        }

        let resolved_index = if args.column_index == -1 {
            rows[0].children().map(|cells| cells.len()).unwrap_or(0)
        } else {
            args.column_index.max(0) as usize
        };

        let header = args.header_content.as_deref().filter(|s| !s.is_empty());
        let mut new_cell_ids = Vec::new();
        for (row_index, row) in rows.iter_mut().enumerate() {
            if !row.is_kind(&NodeKind::TableRow) {
                continue;
            }
            let content = if row_index == 0 && header.is_some() {
                header
            } else {
                args.cells
                    .as_ref()
                    .and_then(|cells| cells.get(row_index))
                    .map(String::as_str)
            };
            let cell = table_cell(content);
            let Some(cells) = row.children_mut() else {
                continue;
            };
            let at = resolved_index.min(cells.len());
            cells.insert(at, cell);

            let mut cell_path = path.clone();
            cell_path.push(row_index);
            cell_path.push(at);
            new_cell_ids.push(format_node_id(&cell_path));
        }

        session.commit_tree(&tree)?;
        Ok(Outcome::ok(
            format!(
                "Successfully inserted column at index {} in table {}.",
                resolved_index, args.table_id
            ),
            InsertTableColumnState {
                column_index: resolved_index,
                new_cell_ids,
            },
        ))
    }

    /// Delete a row, addressed by its own id; the row's parent must be a
    /// table.
    pub fn delete_table_row(&mut self, args: &DeleteTableRowArgs) -> Outcome<DeleteTableRowState> {
        debug!(row_id = %args.row_id, "delete_table_row");
        self.try_delete_table_row(args).unwrap_or_else(|err| {
            warn!(%err, "delete_table_row failed");
            Outcome::fail(format!("Failed to delete table row: {err}"), err)
        })
    }

    fn try_delete_table_row(
        &mut self,
        args: &DeleteTableRowArgs,
    ) -> Result<Outcome<DeleteTableRowState>, EngineError> {
        let session = self.session_mut()?;
        let mut tree = session.fetch_tree()?;
        let row_path = parse_node_id(&args.row_id)?;
        let (parent_path, row_index) =
            split_last(&row_path).ok_or(EngineError::RootDeletion)?;

        let parent_id = format_node_id(parent_path);
        let parent_is_table = tree
            .node_at(parent_path)
            .map(|node| node.is_kind(&NodeKind::Table))
            .unwrap_or(false);
        if !parent_is_table {
            return Err(EngineError::TableNotFound(parent_id));
        }

        let rows = tree
            .children_at_mut(parent_path)
            .ok_or_else(|| EngineError::TableNotFound(parent_id.clone()))?;
        if row_index >= rows.len() {
            return Err(EngineError::NodeNotFound(args.row_id.clone()));
        }
        rows.remove(row_index);

        session.commit_tree(&tree)?;
        Ok(Outcome::ok(
            format!("Successfully deleted row {} from table.", args.row_id),
            DeleteTableRowState {
                deleted_row_id: args.row_id.clone(),
            },
        ))
    }

    /// Delete the cell at a column index from every row that has one; rows
    /// without a cell there are left untouched.
    pub fn delete_table_column(
        &mut self,
        args: &DeleteTableColumnArgs,
    ) -> Outcome<DeleteTableColumnState> {
        debug!(table_id = %args.table_id, column_index = args.column_index, "delete_table_column");
        self.try_delete_table_column(args).unwrap_or_else(|err| {
            warn!(%err, "delete_table_column failed");
            Outcome::fail(format!("Failed to delete table column: {err}"), err)
        })
    }

    fn try_delete_table_column(
        &mut self,
        args: &DeleteTableColumnArgs,
    ) -> Result<Outcome<DeleteTableColumnState>, EngineError> {
        let session = self.session_mut()?;
        let mut tree = session.fetch_tree()?;
        let path = table_path(&tree, &args.table_id)?;
        let rows = tree
            .children_at_mut(&path)
            .ok_or_else(|| EngineError::TableNotFound(args.table_id.clone()))?;
        if rows.is_empty() {
            return Err(EngineError::EmptyTable(args.table_id.clone()));
        }

        let mut deleted_cell_ids = Vec::new();
        for (row_index, row) in rows.iter_mut().enumerate() {
            if !row.is_kind(&NodeKind::TableRow) {
                continue;
            }
            let Some(cells) = row.children_mut() else {
                continue;
            };
            if args.column_index >= cells.len() {
                continue;
            }
            cells.remove(args.column_index);

            let mut cell_path = path.clone();
            cell_path.push(row_index);
            cell_path.push(args.column_index);
            deleted_cell_ids.push(format_node_id(&cell_path));
        }

        session.commit_tree(&tree)?;
        Ok(Outcome::ok(
            format!(
                "Successfully deleted column at index {} from table {}.",
                args.column_index, args.table_id
            ),
            DeleteTableColumnState {
                column_index: args.column_index,
                deleted_cell_ids,
            },
        ))
    }
}
