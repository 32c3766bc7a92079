//! Document outline filtering.
//!
//! The content pipeline hands over a page's block structure as a list of
//! [`OutlineNode`]s. Only level-2 headings with visible text become
//! sidebar anchors; everything else is carried as [`OutlineNode::Other`]
//! so outlines from richer pipelines deserialize without loss of position.

use serde::Deserialize;

/// A block-level node from a document outline.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutlineNode {
    /// A heading with its depth (1 to 6) and inline content.
    Heading {
        /// Heading depth; only depth 2 produces anchors.
        depth: u8,
        /// Inline content of the heading.
        #[serde(default)]
        spans: Vec<InlineSpan>,
    },
    /// Any other block node; never contributes an anchor.
    #[serde(other)]
    Other,
}

impl OutlineNode {
    /// Create a heading node.
    #[must_use]
    pub fn heading(depth: u8, spans: Vec<InlineSpan>) -> Self {
        Self::Heading { depth, spans }
    }
}

/// An inline node inside a heading.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Plain text content.
    Text {
        /// The text itself.
        value: String,
    },
    /// Non-text inline content (code, emphasis wrappers, images).
    /// Contributes nothing to the anchor text.
    #[serde(other)]
    Other,
}

impl InlineSpan {
    /// Create a text span.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }
}

/// Extract anchor texts from a page outline.
///
/// Keeps level-2 headings that carry at least one inline span; the anchor
/// text is the concatenation of the heading's plain-text spans. Headings
/// whose extracted text is empty are dropped.
///
/// # Examples
///
/// ```
/// use sidenav_anchors::{InlineSpan, OutlineNode, anchors_from_outline};
///
/// let outline = vec![
///     OutlineNode::heading(1, vec![InlineSpan::text("Title")]),
///     OutlineNode::heading(2, vec![InlineSpan::text("Setup")]),
///     OutlineNode::heading(3, vec![InlineSpan::text("Details")]),
/// ];
///
/// assert_eq!(anchors_from_outline(&outline), vec!["Setup".to_owned()]);
/// ```
#[must_use]
pub fn anchors_from_outline(outline: &[OutlineNode]) -> Vec<String> {
    outline
        .iter()
        .filter_map(|node| match node {
            OutlineNode::Heading { depth: 2, spans } if !spans.is_empty() => {
                let text = heading_text(spans);
                (!text.is_empty()).then_some(text)
            }
            _ => None,
        })
        .collect()
}

/// Concatenate the plain-text spans of a heading.
fn heading_text(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .filter_map(|span| match span {
            InlineSpan::Text { value } => Some(value.as_str()),
            InlineSpan::Other => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_anchors_keeps_depth_two_headings() {
        let outline = vec![
            OutlineNode::heading(2, vec![InlineSpan::text("Install")]),
            OutlineNode::heading(2, vec![InlineSpan::text("Usage")]),
        ];

        let anchors = anchors_from_outline(&outline);

        assert_eq!(anchors, vec!["Install".to_owned(), "Usage".to_owned()]);
    }

    #[test]
    fn test_anchors_ignores_other_depths() {
        let outline = vec![
            OutlineNode::heading(1, vec![InlineSpan::text("Title")]),
            OutlineNode::heading(2, vec![InlineSpan::text("Setup")]),
            OutlineNode::heading(3, vec![InlineSpan::text("Advanced")]),
            OutlineNode::heading(4, vec![InlineSpan::text("Internals")]),
        ];

        let anchors = anchors_from_outline(&outline);

        assert_eq!(anchors, vec!["Setup".to_owned()]);
    }

    #[test]
    fn test_anchors_ignores_non_heading_nodes() {
        let outline = vec![
            OutlineNode::Other,
            OutlineNode::heading(2, vec![InlineSpan::text("Setup")]),
            OutlineNode::Other,
        ];

        let anchors = anchors_from_outline(&outline);

        assert_eq!(anchors, vec!["Setup".to_owned()]);
    }

    #[test]
    fn test_anchors_concatenates_text_spans() {
        let outline = vec![OutlineNode::heading(
            2,
            vec![
                InlineSpan::text("Install "),
                InlineSpan::Other, // e.g. inline code
                InlineSpan::text(" locally"),
            ],
        )];

        let anchors = anchors_from_outline(&outline);

        assert_eq!(anchors, vec!["Install  locally".to_owned()]);
    }

    #[test]
    fn test_anchors_drops_headings_without_spans() {
        let outline = vec![OutlineNode::heading(2, Vec::new())];

        assert!(anchors_from_outline(&outline).is_empty());
    }

    #[test]
    fn test_anchors_drops_headings_with_empty_text() {
        // Only non-text content, extracted text is empty
        let outline = vec![OutlineNode::heading(2, vec![InlineSpan::Other])];

        assert!(anchors_from_outline(&outline).is_empty());
    }

    #[test]
    fn test_anchors_empty_outline_returns_empty() {
        assert!(anchors_from_outline(&[]).is_empty());
    }

    #[test]
    fn test_anchors_preserve_document_order() {
        let outline = vec![
            OutlineNode::heading(2, vec![InlineSpan::text("Zebra")]),
            OutlineNode::heading(2, vec![InlineSpan::text("Apple")]),
            OutlineNode::heading(2, vec![InlineSpan::text("Mango")]),
        ];

        let anchors = anchors_from_outline(&outline);

        assert_eq!(
            anchors,
            vec!["Zebra".to_owned(), "Apple".to_owned(), "Mango".to_owned()]
        );
    }

    #[test]
    fn test_outline_deserializes_tagged_json() {
        let json = r#"[
            {"kind": "heading", "depth": 2, "spans": [{"kind": "text", "value": "Setup"}]},
            {"kind": "paragraph"},
            {"kind": "heading", "depth": 2, "spans": [
                {"kind": "text", "value": "Install "},
                {"kind": "inline_code", "value": "npm"}
            ]}
        ]"#;

        let outline: Vec<OutlineNode> = serde_json::from_str(json).unwrap();

        assert_eq!(outline.len(), 3);
        assert_eq!(outline[1], OutlineNode::Other);
        assert_eq!(
            anchors_from_outline(&outline),
            vec!["Setup".to_owned(), "Install ".to_owned()]
        );
    }
}
