//! Navigation sidebar model for documentation sites.
//!
//! This crate provides:
//! - [`Sidebar`]: Per-reader session reacting to navigation and clicks
//! - [`NavNode`]: Page tree the menus are rendered from
//! - [`SidebarView`]: Plain snapshot for desktop and mobile rendering
//!
//! # Quick Start
//!
//! ```
//! use sidenav::{NavNode, Sidebar, SidebarOptions};
//!
//! let tree = vec![
//!     NavNode::leaf("/", "Introduction"),
//!     NavNode::folder(
//!         "/docs",
//!         "Documentation",
//!         vec![NavNode::leaf("/docs/setup", "Setup")],
//!     ),
//! ];
//! let sidebar = Sidebar::new(tree, SidebarOptions::default());
//!
//! // A route change marks and expands the branch the page lives in
//! sidebar.set_current_path("/docs/setup");
//!
//! let view = sidebar.view();
//! assert!(view.desktop[1].is_active());
//! ```

pub mod route;

pub(crate) mod sidebar;
pub(crate) mod state;
pub(crate) mod tree;
pub(crate) mod view;

pub use sidebar::{MenuFlag, MobileMenu, NullRouter, Router, Sidebar, SidebarOptions};
pub use state::ExpansionState;
pub use tree::{FolderNode, LeafNode, NavNode, flatten};
pub use view::{MenuEntry, SidebarView};

// Re-export anchor and outline types from sidenav-anchors for convenience
pub use sidenav_anchors::{
    AnchorLink, InlineSpan, NullScrollTracker, OutlineNode, ScrollTracker,
};
