//! Navigation tree model.
//!
//! The sidebar renders a tree of [`NavNode`]s: folders group pages, leaves
//! link to them. Trees arrive precomputed from the content pipeline (built
//! in Rust or deserialized from JSON) and are read-only here; expansion and
//! highlighting state live in [`ExpansionState`](crate::ExpansionState) and
//! the [`Sidebar`](crate::Sidebar) session.
//!
//! Trees are trusted input: acyclic, finite depth, routes unique among
//! siblings. A cyclic structure would recurse without bound.

use serde::{Deserialize, Serialize};
use sidenav_anchors::{OutlineNode, anchors_from_outline};

/// A node in the navigation tree.
///
/// Folders and leaves are distinct variants rather than one struct with an
/// optional children field, so a childless folder and a page cannot be
/// confused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavNode {
    /// A collapsible group of pages.
    Folder(FolderNode),
    /// A page link.
    Leaf(LeafNode),
}

/// A collapsible group of pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Route of the folder's landing page.
    pub route: String,
    /// Display title.
    pub title: String,
    /// Child nodes in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

/// A page link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafNode {
    /// Route of the page.
    pub route: String,
    /// Display title.
    pub title: String,
    /// Level-2 heading texts of the page, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anchors: Vec<String>,
}

impl LeafNode {
    /// Build a leaf from a page's heading outline.
    ///
    /// Anchor texts are the level-2 headings with visible text, as
    /// filtered by [`anchors_from_outline`].
    #[must_use]
    pub fn from_outline(
        route: impl Into<String>,
        title: impl Into<String>,
        outline: &[OutlineNode],
    ) -> Self {
        Self {
            route: route.into(),
            title: title.into(),
            anchors: anchors_from_outline(outline),
        }
    }
}

impl NavNode {
    /// Create a folder node.
    #[must_use]
    pub fn folder(
        route: impl Into<String>,
        title: impl Into<String>,
        children: Vec<NavNode>,
    ) -> Self {
        Self::Folder(FolderNode {
            route: route.into(),
            title: title.into(),
            children,
        })
    }

    /// Create a leaf node without anchors.
    #[must_use]
    pub fn leaf(route: impl Into<String>, title: impl Into<String>) -> Self {
        Self::Leaf(LeafNode {
            route: route.into(),
            title: title.into(),
            anchors: Vec::new(),
        })
    }

    /// Create a leaf node with anchor texts.
    #[must_use]
    pub fn leaf_with_anchors(
        route: impl Into<String>,
        title: impl Into<String>,
        anchors: Vec<String>,
    ) -> Self {
        Self::Leaf(LeafNode {
            route: route.into(),
            title: title.into(),
            anchors,
        })
    }

    /// Route of this node's link target.
    #[must_use]
    pub fn route(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.route,
            Self::Leaf(leaf) => &leaf.route,
        }
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.title,
            Self::Leaf(leaf) => &leaf.title,
        }
    }

    /// True for folder nodes.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }
}

/// Collect the leaves of a tree in document order.
///
/// The flat page list backs the host's search collaborator and prev/next
/// pagination.
#[must_use]
pub fn flatten(nodes: &[NavNode]) -> Vec<&LeafNode> {
    let mut leaves = Vec::new();
    collect_leaves(nodes, &mut leaves);
    leaves
}

fn collect_leaves<'a>(nodes: &'a [NavNode], leaves: &mut Vec<&'a LeafNode>) {
    for node in nodes {
        match node {
            NavNode::Folder(folder) => collect_leaves(&folder.children, leaves),
            NavNode::Leaf(leaf) => leaves.push(leaf),
        }
    }
}
