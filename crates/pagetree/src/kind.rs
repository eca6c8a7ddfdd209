//! Node kinds and the tag → kind mapping table.
//!
//! Operation inputs use a loose HTML-like tag vocabulary (`p`, `h1`..`h6`,
//! `span`, `tr`, ...). The tree itself uses the closed [`NodeKind`]
//! enumeration. [`kind_for_tag`] is the single, fixed mapping between the
//! two; tags with no mapping pass through as [`NodeKind::Other`] so unknown
//! vocabulary is preserved rather than rejected.

use serde::{Deserialize, Serialize};

/// The kind of a document tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Paragraph,
    Heading,
    Text,
    Table,
    TableRow,
    TableCell,
    List,
    ListItem,
    Quote,
    Code,
    Image,
    Link,
    /// Pass-through for kinds outside the fixed vocabulary.
    Other(String),
}

impl NodeKind {
    /// Returns the wire name of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::Text => "text",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tablerow",
            NodeKind::TableCell => "tablecell",
            NodeKind::List => "list",
            NodeKind::ListItem => "listitem",
            NodeKind::Quote => "quote",
            NodeKind::Code => "code",
            NodeKind::Image => "image",
            NodeKind::Link => "link",
            NodeKind::Other(name) => name,
        }
    }

    /// Parses a wire name into a kind. Unknown names become
    /// [`NodeKind::Other`]; this function is total.
    pub fn from_str(s: &str) -> NodeKind {
        match s {
            "root" => NodeKind::Root,
            "paragraph" => NodeKind::Paragraph,
            "heading" => NodeKind::Heading,
            "text" => NodeKind::Text,
            "table" => NodeKind::Table,
            "tablerow" => NodeKind::TableRow,
            "tablecell" => NodeKind::TableCell,
            "list" => NodeKind::List,
            "listitem" => NodeKind::ListItem,
            "quote" => NodeKind::Quote,
            "code" => NodeKind::Code,
            "image" => NodeKind::Image,
            "link" => NodeKind::Link,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

impl Serialize for NodeKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(NodeKind::from_str(&s))
    }
}

/// Map an input tag to its tree node kind.
///
/// The mapping is a fixed table. `thead`/`tbody` are intentionally absent:
/// they are structural wrappers the fragment decoder flattens away, never
/// kinds of their own, so here they fall through as [`NodeKind::Other`]
/// like any other unmapped tag.
pub fn kind_for_tag(tag: &str) -> NodeKind {
    match tag {
        "a" => NodeKind::Link,
        "blockquote" => NodeKind::Quote,
        "code" | "pre" => NodeKind::Code,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => NodeKind::Heading,
        "img" => NodeKind::Image,
        "li" => NodeKind::ListItem,
        "ol" | "ul" => NodeKind::List,
        "p" => NodeKind::Paragraph,
        "span" => NodeKind::Text,
        "table" => NodeKind::Table,
        "td" | "th" => NodeKind::TableCell,
        "tr" => NodeKind::TableRow,
        other => NodeKind::from_str(other),
    }
}

/// Returns true for the heading tags `h1`..`h6`, the only tags whose name
/// is carried onto the node as its `tag` field.
pub fn is_heading_tag(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_table() {
        assert_eq!(kind_for_tag("p"), NodeKind::Paragraph);
        assert_eq!(kind_for_tag("a"), NodeKind::Link);
        assert_eq!(kind_for_tag("blockquote"), NodeKind::Quote);
        assert_eq!(kind_for_tag("pre"), NodeKind::Code);
        assert_eq!(kind_for_tag("code"), NodeKind::Code);
        assert_eq!(kind_for_tag("img"), NodeKind::Image);
        assert_eq!(kind_for_tag("span"), NodeKind::Text);
        assert_eq!(kind_for_tag("ul"), NodeKind::List);
        assert_eq!(kind_for_tag("ol"), NodeKind::List);
        assert_eq!(kind_for_tag("li"), NodeKind::ListItem);
        assert_eq!(kind_for_tag("table"), NodeKind::Table);
        assert_eq!(kind_for_tag("tr"), NodeKind::TableRow);
        assert_eq!(kind_for_tag("td"), NodeKind::TableCell);
        assert_eq!(kind_for_tag("th"), NodeKind::TableCell);
    }

    #[test]
    fn every_heading_level_maps_to_heading() {
        for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
            assert_eq!(kind_for_tag(tag), NodeKind::Heading);
            assert!(is_heading_tag(tag));
        }
        assert!(!is_heading_tag("h7"));
        assert!(!is_heading_tag("h"));
        assert!(!is_heading_tag("p"));
    }

    #[test]
    fn unknown_tags_pass_through() {
        assert_eq!(kind_for_tag("custom"), NodeKind::Other("custom".into()));
        // Wrapper tags are not kinds; they only exist for the decoder to unwrap.
        assert_eq!(kind_for_tag("thead"), NodeKind::Other("thead".into()));
        assert_eq!(kind_for_tag("tbody"), NodeKind::Other("tbody".into()));
    }

    #[test]
    fn kind_names_roundtrip() {
        let kinds = [
            NodeKind::Root,
            NodeKind::Paragraph,
            NodeKind::Heading,
            NodeKind::Text,
            NodeKind::Table,
            NodeKind::TableRow,
            NodeKind::TableCell,
            NodeKind::List,
            NodeKind::ListItem,
            NodeKind::Quote,
            NodeKind::Code,
            NodeKind::Image,
            NodeKind::Link,
            NodeKind::Other("widget".into()),
        ];
        for kind in kinds {
            assert_eq!(NodeKind::from_str(kind.as_str()), kind);
        }
    }

    #[test]
    fn tree_kind_names_are_already_kinds() {
        // Feeding a kind name through the tag mapping is the identity.
        assert_eq!(kind_for_tag("text"), NodeKind::Text);
        assert_eq!(kind_for_tag("paragraph"), NodeKind::Paragraph);
        assert_eq!(kind_for_tag("tablerow"), NodeKind::TableRow);
    }
}
