//! Minimal table-fragment decoder.
//!
//! A best-effort, non-validating decoder for the pre-formed row/cell markup
//! that table-building callers pass as a convenience. It recognizes flat
//! `<tag ...>content</tag>` triples and self-closing tags, recursing into
//! content only when it contains another tag; `<thead>`/`<tbody>` wrappers
//! are unwrapped since the tree model has no such grouping kind.
//!
//! This is deliberately not a markup parser: attributes are dropped,
//! same-tag nesting is unsupported, and arbitrary markup will not
//! round-trip. Callers needing more than row/cell fragments should build
//! nodes directly.

use std::sync::OnceLock;

use regex::Regex;

use crate::kind::{kind_for_tag, NodeKind};
use crate::node::{ElementNode, Node};

fn open_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(\w+)([^>]*)>").expect("tag pattern compiles"))
}

fn any_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<\w+").expect("tag pattern compiles"))
}

fn table_markup_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(?:tr|td|th|thead|tbody)").expect("tag pattern compiles"))
}

/// Whether raw markup contains row/cell tags and should be decoded rather
/// than stored as plain text.
pub fn contains_table_markup(markup: &str) -> bool {
    table_markup_re().is_match(markup)
}

/// Decode a markup fragment into tree nodes, best-effort.
pub fn decode_fragment(markup: &str) -> Vec<Node> {
    let mut out = Vec::new();
    let mut rest = markup;

    while let Some(caps) = open_tag_re().captures(rest) {
        let whole = caps.get(0).expect("group 0 always present");
        let tag = caps[1].to_string();
        let self_closing = caps[2].trim_end().ends_with('/');
        let after_open = whole.end();

        if self_closing {
            push_decoded(&mut out, &tag, "");
            rest = &rest[after_open..];
            continue;
        }

        let close = format!("</{tag}>");
        match rest[after_open..].find(&close) {
            Some(offset) => {
                let inner = &rest[after_open..after_open + offset];
                push_decoded(&mut out, &tag, inner);
                rest = &rest[after_open + offset + close.len()..];
            }
            None => {
                // Unbalanced opening tag: skip it and keep scanning.
                rest = &rest[after_open..];
            }
        }
    }

    out
}

fn push_decoded(out: &mut Vec<Node>, tag: &str, inner: &str) {
    // thead/tbody are grouping wrappers only; splice their children in.
    if tag == "thead" || tag == "tbody" {
        out.extend(decode_fragment(inner));
        return;
    }

    let kind = kind_for_tag(tag);
    if kind == NodeKind::Text {
        out.push(Node::text(inner.trim()));
        return;
    }

    let mut element = ElementNode::new(kind);
    if any_tag_re().is_match(inner) {
        element.children = decode_fragment(inner);
    } else if !inner.trim().is_empty() {
        element.children = vec![Node::text(inner.trim())];
    }
    out.push(Node::Element(element));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_text(node: &Node) -> &str {
        &node.children().unwrap()[0].as_text().unwrap().text
    }

    #[test]
    fn single_row_of_cells() {
        let nodes = decode_fragment("<tr><td>A</td><td>B</td></tr>");
        assert_eq!(nodes.len(), 1);
        let row = nodes[0].as_element().unwrap();
        assert_eq!(row.kind, NodeKind::TableRow);
        assert_eq!(row.children.len(), 2);
        assert_eq!(cell_text(&row.children[0]), "A");
        assert_eq!(cell_text(&row.children[1]), "B");
    }

    #[test]
    fn sibling_rows() {
        let nodes = decode_fragment("<tr><td>1</td></tr><tr><td>2</td></tr>");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].kind(), NodeKind::TableRow);
        assert_eq!(nodes[1].kind(), NodeKind::TableRow);
    }

    #[test]
    fn thead_and_tbody_are_unwrapped() {
        let nodes = decode_fragment(
            "<thead><tr><th>H</th></tr></thead><tbody><tr><td>C</td></tr></tbody>",
        );
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].kind(), NodeKind::TableRow);
        assert_eq!(nodes[1].kind(), NodeKind::TableRow);
        assert_eq!(cell_text(&nodes[0].children().unwrap()[0]), "H");
    }

    #[test]
    fn self_closing_tag_is_an_empty_element() {
        let nodes = decode_fragment("<img/>");
        assert_eq!(nodes.len(), 1);
        let el = nodes[0].as_element().unwrap();
        assert_eq!(el.kind, NodeKind::Image);
        assert!(el.children.is_empty());
    }

    #[test]
    fn inner_text_is_trimmed() {
        let nodes = decode_fragment("<td>  padded  </td>");
        assert_eq!(cell_text(&nodes[0]), "padded");
    }

    #[test]
    fn empty_content_yields_no_children() {
        let nodes = decode_fragment("<td></td>");
        assert!(nodes[0].children().unwrap().is_empty());
        let blank = decode_fragment("<td>   </td>");
        assert!(blank[0].children().unwrap().is_empty());
    }

    #[test]
    fn tag_attributes_are_ignored() {
        let nodes = decode_fragment(r#"<td colspan="2">X</td>"#);
        let el = nodes[0].as_element().unwrap();
        assert_eq!(el.kind, NodeKind::TableCell);
        assert!(el.attrs.is_empty());
        assert_eq!(cell_text(&nodes[0]), "X");
    }

    #[test]
    fn unbalanced_tag_is_skipped() {
        let nodes = decode_fragment("<tr><td>kept</td>");
        // The dangling <tr> never closes; its inner cell is still recognized.
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind(), NodeKind::TableCell);
    }

    #[test]
    fn plain_text_between_tags_is_dropped() {
        let nodes = decode_fragment("noise<td>X</td>noise");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind(), NodeKind::TableCell);
    }

    #[test]
    fn no_tags_yields_nothing() {
        assert!(decode_fragment("").is_empty());
        assert!(decode_fragment("plain words").is_empty());
    }

    #[test]
    fn table_markup_detection() {
        assert!(contains_table_markup("<tr>"));
        assert!(contains_table_markup("x <tbody> y"));
        assert!(!contains_table_markup("<p>hi</p>"));
        assert!(!contains_table_markup("tr td"));
    }
}
