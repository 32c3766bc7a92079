//! Rendered sidebar snapshots.
//!
//! A [`SidebarView`] is a plain value derived from the session state at a
//! point in time. Nothing in it is live; after the next navigation or
//! toggle the caller derives a fresh one.

use serde::Serialize;
use sidenav_anchors::AnchorLink;

/// One rendered row of the sidebar menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    /// A collapsible section.
    Folder {
        /// Route of the folder's own page.
        route: String,
        /// Display title.
        title: String,
        /// Whether the section's children are shown.
        expanded: bool,
        /// Whether the active page is this folder's page or lives under it.
        active: bool,
        /// Rendered children; empty while the folder is collapsed.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<MenuEntry>,
    },
    /// A link to a single page.
    Link {
        /// Route of the page.
        route: String,
        /// Display title.
        title: String,
        /// Whether this is the active page.
        active: bool,
        /// In-page anchors, present only on the active page when the
        /// render target shows anchors inline.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        anchors: Vec<AnchorLink>,
    },
}

impl MenuEntry {
    /// Route of the entry.
    #[must_use]
    pub fn route(&self) -> &str {
        match self {
            Self::Folder { route, .. } | Self::Link { route, .. } => route,
        }
    }

    /// Display title of the entry.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Folder { title, .. } | Self::Link { title, .. } => title,
        }
    }

    /// Whether the entry marks or contains the active page.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::Folder { active, .. } | Self::Link { active, .. } => *active,
        }
    }
}

/// Snapshot of the whole sidebar for one navigation state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    /// Menu rendered from the page tree, for wide layouts.
    pub desktop: Vec<MenuEntry>,
    /// Menu rendered from the full tree, for the collapsible mobile menu.
    pub mobile: Vec<MenuEntry>,
    /// Whether the mobile menu overlay is currently open.
    pub menu_open: bool,
    /// Whether the mobile menu should render a search input above the tree.
    pub search_enabled: bool,
}
