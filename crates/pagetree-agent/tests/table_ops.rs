//! Table structure behavior: row/column insertion and deletion, column
//! count derivation, and the documented short-row leniency.

use pagetree_agent::{
    DeleteTableColumnArgs, DeleteTableRowArgs, InsertPosition, InsertTableColumnArgs,
    InsertTableRowArgs, MemorySession, PageAgentRuntime,
};
use serde_json::{json, Value};

fn cell(text: &str) -> Value {
    json!({"type": "tablecell", "children": [{"type": "text", "text": text}]})
}

fn row(cells: &[&str]) -> Value {
    json!({
        "type": "tablerow",
        "children": cells.iter().map(|c| cell(c)).collect::<Vec<_>>()
    })
}

/// A document whose single top-level node is a 2×3 table.
fn runtime() -> PageAgentRuntime<MemorySession> {
    let session = MemorySession::from_value(&json!({
        "root": {
            "type": "root",
            "children": [{
                "type": "table",
                "children": [
                    row(&["Header 1", "Header 2", "Header 3"]),
                    row(&["Cell 1", "Cell 2", "Cell 3"])
                ]
            }]
        }
    }))
    .unwrap();
    PageAgentRuntime::with_session(session)
}

fn doc(runtime: &PageAgentRuntime<MemorySession>) -> Value {
    runtime.session().unwrap().to_value()
}

fn table_rows(doc: &Value) -> &Vec<Value> {
    doc["root"]["children"][0]["children"].as_array().unwrap()
}

// ── insert_table_row ──────────────────────────────────────────────────────

#[test]
fn appends_a_row_at_the_end() {
    let mut rt = runtime();
    let result = rt.insert_table_row(&InsertTableRowArgs {
        table_id: "node_0".into(),
        cells: Some(vec!["New 1".into(), "New 2".into(), "New 3".into()]),
        ..Default::default()
    });

    assert!(result.success);
    let doc = doc(&rt);
    let rows = table_rows(&doc);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["type"], json!("tablerow"));
    assert_eq!(rows[2]["children"][0]["children"][0]["text"], json!("New 1"));
    assert_eq!(result.state.unwrap().new_row_id, "node_0_2");
}

#[test]
fn inserts_a_row_before_the_reference_row() {
    let mut rt = runtime();
    let result = rt.insert_table_row(&InsertTableRowArgs {
        table_id: "node_0".into(),
        cells: Some(vec![
            "Inserted 1".into(),
            "Inserted 2".into(),
            "Inserted 3".into(),
        ]),
        reference_row_id: Some("node_0_1".into()),
        position: Some(InsertPosition::Before),
    });

    assert!(result.success);
    let doc = doc(&rt);
    let rows = table_rows(&doc);
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[1]["children"][0]["children"][0]["text"],
        json!("Inserted 1")
    );
    assert_eq!(result.state.unwrap().new_row_id, "node_0_1");
}

#[test]
fn inserts_a_row_after_the_reference_row_by_default() {
    let mut rt = runtime();
    let result = rt.insert_table_row(&InsertTableRowArgs {
        table_id: "node_0".into(),
        cells: Some(vec!["Mid 1".into(), "Mid 2".into(), "Mid 3".into()]),
        reference_row_id: Some("node_0_0".into()),
        ..Default::default()
    });

    assert!(result.success);
    let doc = doc(&rt);
    assert_eq!(
        table_rows(&doc)[1]["children"][0]["children"][0]["text"],
        json!("Mid 1")
    );
}

#[test]
fn derives_the_column_count_from_the_first_row() {
    let mut rt = runtime();
    let result = rt.insert_table_row(&InsertTableRowArgs {
        table_id: "node_0".into(),
        ..Default::default()
    });

    assert!(result.success);
    assert!(result.content.contains("3 cells"));
    let doc = doc(&rt);
    let new_row = &table_rows(&doc)[2];
    let cells = new_row["children"].as_array().unwrap();
    assert_eq!(cells.len(), 3);
    assert!(cells[0]["children"].as_array().unwrap().is_empty());
}

#[test]
fn falls_back_to_supplied_cells_then_three_for_an_empty_table() {
    let session = MemorySession::from_value(&json!({
        "root": {"type": "root", "children": [{"type": "table", "children": []}]}
    }))
    .unwrap();
    let mut rt = PageAgentRuntime::with_session(session);

    let result = rt.insert_table_row(&InsertTableRowArgs {
        table_id: "node_0".into(),
        cells: Some(vec!["A".into(), "B".into()]),
        ..Default::default()
    });
    assert!(result.success);
    let after_first = doc(&rt);
    assert_eq!(
        table_rows(&after_first)[0]["children"].as_array().unwrap().len(),
        2
    );

    let result = rt.insert_table_row(&InsertTableRowArgs {
        table_id: "node_0".into(),
        reference_row_id: Some("node_0_99".into()),
        ..Default::default()
    });
    // Unknown reference rows append at the end; the first row now fixes the
    // column count at 2.
    assert!(result.success);
    let after_second = doc(&rt);
    assert_eq!(table_rows(&after_second).len(), 2);
    assert_eq!(
        table_rows(&after_second)[1]["children"].as_array().unwrap().len(),
        2
    );
}

#[test]
fn row_insert_fails_when_the_target_is_not_a_table() {
    let session = MemorySession::from_value(&json!({
        "root": {"type": "root", "children": [{"type": "paragraph", "children": []}]}
    }))
    .unwrap();
    let mut rt = PageAgentRuntime::with_session(session);

    let result = rt.insert_table_row(&InsertTableRowArgs {
        table_id: "node_0".into(),
        ..Default::default()
    });
    assert!(!result.success);
    assert!(result.content.contains("not found"));
}

// ── insert_table_column ───────────────────────────────────────────────────

#[test]
fn inserts_a_column_at_an_explicit_index() {
    let mut rt = runtime();
    let result = rt.insert_table_column(&InsertTableColumnArgs {
        table_id: "node_0".into(),
        column_index: 1,
        cells: Some(vec!["Header 4".into(), "Cell 4".into()]),
        ..Default::default()
    });

    assert!(result.success);
    let doc = doc(&rt);
    let rows = table_rows(&doc);
    assert_eq!(rows[0]["children"].as_array().unwrap().len(), 4);
    assert_eq!(rows[1]["children"].as_array().unwrap().len(), 4);
    assert_eq!(
        rows[0]["children"][1]["children"][0]["text"],
        json!("Header 4")
    );
    assert_eq!(rows[1]["children"][1]["children"][0]["text"], json!("Cell 4"));

    let state = result.state.unwrap();
    assert_eq!(state.column_index, 1);
    assert_eq!(state.new_cell_ids, vec!["node_0_0_1", "node_0_1_1"]);
}

#[test]
fn negative_one_appends_the_column() {
    let mut rt = runtime();
    let result = rt.insert_table_column(&InsertTableColumnArgs {
        table_id: "node_0".into(),
        column_index: -1,
        cells: Some(vec!["Header 4".into(), "Cell 4".into()]),
        ..Default::default()
    });

    assert!(result.success);
    let doc = doc(&rt);
    let rows = table_rows(&doc);
    assert_eq!(rows[0]["children"].as_array().unwrap().len(), 4);
    assert_eq!(
        rows[0]["children"][3]["children"][0]["text"],
        json!("Header 4")
    );
    assert_eq!(result.state.unwrap().column_index, 3);
}

#[test]
fn header_content_goes_to_the_first_row() {
    let mut rt = runtime();
    let result = rt.insert_table_column(&InsertTableColumnArgs {
        table_id: "node_0".into(),
        column_index: 0,
        cells: Some(vec!["ignored for row 0".into(), "Body".into()]),
        header_content: Some("Header".into()),
    });

    assert!(result.success);
    let doc = doc(&rt);
    let rows = table_rows(&doc);
    assert_eq!(rows[0]["children"][0]["children"][0]["text"], json!("Header"));
    assert_eq!(rows[1]["children"][0]["children"][0]["text"], json!("Body"));
}

#[test]
fn column_insert_into_an_empty_table_fails() {
    let session = MemorySession::from_value(&json!({
        "root": {"type": "root", "children": [{"type": "table", "children": []}]}
    }))
    .unwrap();
    let mut rt = PageAgentRuntime::with_session(session);

    let result = rt.insert_table_column(&InsertTableColumnArgs {
        table_id: "node_0".into(),
        column_index: 0,
        ..Default::default()
    });
    assert!(!result.success);
    assert!(result.content.contains("no rows"));
}

// ── delete_table_row ──────────────────────────────────────────────────────

#[test]
fn deletes_a_row_by_id() {
    let mut rt = runtime();
    let result = rt.delete_table_row(&DeleteTableRowArgs {
        row_id: "node_0_1".into(),
    });

    assert!(result.success);
    let doc = doc(&rt);
    let rows = table_rows(&doc);
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0]["children"][0]["children"][0]["text"],
        json!("Header 1")
    );
}

#[test]
fn deleting_a_missing_row_fails() {
    let mut rt = runtime();
    let result = rt.delete_table_row(&DeleteTableRowArgs {
        row_id: "node_0_99".into(),
    });

    assert!(!result.success);
    assert!(result.content.contains("not found"));
    assert_eq!(table_rows(&doc(&rt)).len(), 2);
}

#[test]
fn deleting_a_row_whose_parent_is_not_a_table_fails() {
    let mut rt = runtime();
    // node_0_0_0 is a cell inside a row, so its parent is a row, not a table.
    let result = rt.delete_table_row(&DeleteTableRowArgs {
        row_id: "node_0_0_0".into(),
    });

    assert!(!result.success);
    assert!(result.content.contains("not found"));
}

// ── delete_table_column ───────────────────────────────────────────────────

#[test]
fn deletes_a_column_at_an_index() {
    let mut rt = runtime();
    let result = rt.delete_table_column(&DeleteTableColumnArgs {
        table_id: "node_0".into(),
        column_index: 1,
    });

    assert!(result.success);
    let doc = doc(&rt);
    let rows = table_rows(&doc);
    assert_eq!(rows[0]["children"].as_array().unwrap().len(), 2);
    assert_eq!(
        rows[0]["children"][0]["children"][0]["text"],
        json!("Header 1")
    );
    assert_eq!(
        rows[0]["children"][1]["children"][0]["text"],
        json!("Header 3")
    );

    let state = result.state.unwrap();
    assert_eq!(state.column_index, 1);
    assert_eq!(state.deleted_cell_ids, vec!["node_0_0_1", "node_0_1_1"]);
}

#[test]
fn short_rows_are_skipped_not_errored() {
    let session = MemorySession::from_value(&json!({
        "root": {"type": "root", "children": [{
            "type": "table",
            "children": [
                row(&["A", "B", "C"]),
                row(&["only one"])
            ]
        }]}
    }))
    .unwrap();
    let mut rt = PageAgentRuntime::with_session(session);

    let result = rt.delete_table_column(&DeleteTableColumnArgs {
        table_id: "node_0".into(),
        column_index: 1,
    });

    assert!(result.success);
    let doc = doc(&rt);
    let rows = table_rows(&doc);
    assert_eq!(rows[0]["children"].as_array().unwrap().len(), 2);
    // The short row keeps its single cell.
    assert_eq!(rows[1]["children"].as_array().unwrap().len(), 1);
    assert_eq!(result.state.unwrap().deleted_cell_ids, vec!["node_0_0_1"]);
}

#[test]
fn column_delete_on_a_missing_table_fails() {
    let mut rt = runtime();
    let result = rt.delete_table_column(&DeleteTableColumnArgs {
        table_id: "node_99".into(),
        column_index: 0,
    });

    assert!(!result.success);
    assert!(result.content.contains("not found"));
}
