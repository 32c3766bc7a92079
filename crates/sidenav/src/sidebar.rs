//! Sidebar session: navigation state plus host collaborators.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use sidenav_anchors::{NullScrollTracker, ScrollTracker, resolve_anchors};
use sidenav_config::ThemeConfig;

use crate::route;
use crate::state::ExpansionState;
use crate::tree::{self, LeafNode, NavNode};
use crate::view::{MenuEntry, SidebarView};

/// Host-side navigation.
///
/// The sidebar never loads pages itself; selecting a page hands the route
/// to the host through this trait.
pub trait Router: Send + Sync {
    /// Navigate the host application to `route`.
    fn navigate(&self, route: &str);
}

/// Router that drops navigation requests.
///
/// Useful when the sidebar only tracks state, as in tests or static
/// rendering.
#[derive(Debug, Default)]
pub struct NullRouter;

impl Router for NullRouter {
    fn navigate(&self, _route: &str) {}
}

/// Open/closed flag of the mobile menu overlay.
///
/// The flag usually lives in the host shell, next to the hamburger button,
/// so the sidebar reaches it through this trait.
pub trait MobileMenu: Send + Sync {
    /// Open or close the overlay.
    fn set_open(&self, open: bool);

    /// Whether the overlay is currently open.
    fn is_open(&self) -> bool;
}

/// In-memory [`MobileMenu`] flag, closed initially.
#[derive(Debug, Default)]
pub struct MenuFlag {
    open: AtomicBool,
}

impl MenuFlag {
    /// Create a closed flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MobileMenu for MenuFlag {
    fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::Release);
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}

/// Behavior switches for a [`Sidebar`], usually derived from a
/// [`ThemeConfig`].
#[derive(Clone, Copy, Debug)]
pub struct SidebarOptions {
    /// Collapse folders the reader never expanded.
    pub default_collapsed: bool,
    /// Show in-page anchors in a floating panel instead of the desktop menu.
    pub float_toc: bool,
    /// Show a search input above the mobile menu.
    pub search_enabled: bool,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            default_collapsed: false,
            float_toc: false,
            search_enabled: true,
        }
    }
}

impl From<&ThemeConfig> for SidebarOptions {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            default_collapsed: config.menu.default_collapsed,
            float_toc: config.toc.float,
            search_enabled: config.search.enabled,
        }
    }
}

/// One reader's sidebar session.
///
/// Holds the page trees, the current route, and the collaborators that tie
/// the sidebar to its host: a [`Router`] for page loads, a [`MobileMenu`]
/// flag, and a [`ScrollTracker`] for anchor highlighting. Events update
/// the session; [`view`](Self::view) derives a [`SidebarView`] snapshot
/// without mutating anything.
///
/// # Thread Safety
///
/// Designed for concurrent access without external locking:
/// - the current route sits behind an internal `RwLock`
/// - expansion flags live in an internally synchronized [`ExpansionState`]
/// - collaborators are `Send + Sync` trait objects behind `Arc`
pub struct Sidebar {
    /// Tree shown in the desktop menu.
    page_tree: Vec<NavNode>,
    /// Tree shown in the mobile menu; may carry pages hidden on desktop.
    full_tree: Vec<NavNode>,
    options: SidebarOptions,
    locale: Option<String>,
    current_path: RwLock<String>,
    expansion: Arc<ExpansionState>,
    menu: Arc<dyn MobileMenu>,
    router: Arc<dyn Router>,
    scroll: Arc<dyn ScrollTracker>,
}

impl Sidebar {
    /// Create a session over a page tree, starting at the root route.
    ///
    /// The mobile menu renders the same tree by default; override with
    /// [`with_full_tree`](Self::with_full_tree) when pages hidden on
    /// desktop should still show on mobile.
    #[must_use]
    pub fn new(page_tree: Vec<NavNode>, options: SidebarOptions) -> Self {
        Self {
            full_tree: page_tree.clone(),
            page_tree,
            options,
            locale: None,
            current_path: RwLock::new("/".to_owned()),
            expansion: Arc::new(ExpansionState::new()),
            menu: Arc::new(MenuFlag::new()),
            router: Arc::new(NullRouter),
            scroll: Arc::new(NullScrollTracker),
        }
    }

    /// Replace the tree rendered in the mobile menu.
    #[must_use]
    pub fn with_full_tree(mut self, full_tree: Vec<NavNode>) -> Self {
        self.full_tree = full_tree;
        self
    }

    /// Set the locale whose suffix is stripped from incoming paths.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Share an expansion store with other sessions.
    #[must_use]
    pub fn with_expansion_state(mut self, state: Arc<ExpansionState>) -> Self {
        self.expansion = state;
        self
    }

    /// Set the mobile menu flag.
    #[must_use]
    pub fn with_menu(mut self, menu: Arc<dyn MobileMenu>) -> Self {
        self.menu = menu;
        self
    }

    /// Set the host router.
    #[must_use]
    pub fn with_router(mut self, router: Arc<dyn Router>) -> Self {
        self.router = router;
        self
    }

    /// Set the scroll tracker that drives anchor highlighting.
    #[must_use]
    pub fn with_scroll_tracker(mut self, tracker: Arc<dyn ScrollTracker>) -> Self {
        self.scroll = tracker;
        self
    }

    /// Record a route change.
    ///
    /// The path is normalized (fragment, locale suffix, `index` segment),
    /// and every folder the new page lives under is marked expanded so the
    /// active branch is visible. The marks persist after navigating away.
    ///
    /// # Panics
    ///
    /// Panics if an internal lock is poisoned.
    pub fn set_current_path(&self, path: &str) {
        let normalized = route::normalize(path, self.locale.as_deref());
        tracing::debug!(path = %normalized, "page changed");
        mark_active_ancestors(&self.page_tree, &normalized, &self.expansion);
        mark_active_ancestors(&self.full_tree, &normalized, &self.expansion);
        *self.current_path.write().unwrap() = normalized;
    }

    /// Flip a folder between expanded and collapsed.
    ///
    /// Ignored while the active page is the folder's own page or lives
    /// under it, so the section a reader is inside cannot collapse on
    /// them.
    ///
    /// # Panics
    ///
    /// Panics if an internal lock is poisoned.
    pub fn toggle_folder(&self, route: &str) {
        if route::is_ancestor(route, &self.current_path.read().unwrap()) {
            tracing::debug!(%route, "toggle ignored on active section");
            return;
        }
        let expanded = self.expansion.toggle(route, self.options.default_collapsed);
        tracing::debug!(%route, expanded, "folder toggled");
    }

    /// Select a page from the menu.
    ///
    /// Hands the route to the [`Router`], closes the mobile menu, and
    /// records the route change.
    ///
    /// # Panics
    ///
    /// Panics if an internal lock is poisoned.
    pub fn select_page(&self, route: &str) {
        self.router.navigate(route);
        self.menu.set_open(false);
        self.set_current_path(route);
    }

    /// Select an in-page anchor from the menu.
    ///
    /// Scrolling is the host's business; the sidebar only closes the
    /// mobile menu.
    pub fn select_anchor(&self, slug: &str) {
        tracing::trace!(%slug, "anchor selected");
        self.menu.set_open(false);
    }

    /// Open or close the mobile menu overlay.
    pub fn set_menu_open(&self, open: bool) {
        self.menu.set_open(open);
    }

    /// Current route, normalized.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn current_path(&self) -> String {
        self.current_path.read().unwrap().clone()
    }

    /// Derive a rendering snapshot of the sidebar.
    ///
    /// Pure read: calling it never changes expansion flags or the
    /// current route.
    ///
    /// # Panics
    ///
    /// Panics if an internal lock is poisoned.
    #[must_use]
    pub fn view(&self) -> SidebarView {
        let current = self.current_path.read().unwrap().clone();
        SidebarView {
            desktop: self.render_nodes(&self.page_tree, &current, !self.options.float_toc),
            mobile: self.render_nodes(&self.full_tree, &current, true),
            menu_open: self.menu.is_open(),
            search_enabled: self.options.search_enabled,
        }
    }

    /// Document-order leaves of the full tree, the feed for a search
    /// index.
    #[must_use]
    pub fn flat_pages(&self) -> Vec<&LeafNode> {
        tree::flatten(&self.full_tree)
    }

    fn render_nodes(
        &self,
        nodes: &[NavNode],
        current: &str,
        inline_anchors: bool,
    ) -> Vec<MenuEntry> {
        nodes
            .iter()
            .map(|node| self.render_node(node, current, inline_anchors))
            .collect()
    }

    fn render_node(&self, node: &NavNode, current: &str, inline_anchors: bool) -> MenuEntry {
        match node {
            NavNode::Folder(folder) => {
                let active = route::is_ancestor(&folder.route, current);
                // Active ancestors render open even if the stored flag
                // says collapsed
                let expanded = active
                    || self
                        .expansion
                        .is_expanded(&folder.route, self.options.default_collapsed);
                let children = if expanded {
                    self.render_nodes(&folder.children, current, inline_anchors)
                } else {
                    Vec::new()
                };
                MenuEntry::Folder {
                    route: folder.route.clone(),
                    title: folder.title.clone(),
                    expanded,
                    active,
                    children,
                }
            }
            NavNode::Leaf(leaf) => {
                let active = route::routes_match(&leaf.route, current);
                let anchors = if active && inline_anchors && !leaf.anchors.is_empty() {
                    resolve_anchors(&leaf.anchors, self.scroll.as_ref())
                } else {
                    Vec::new()
                };
                MenuEntry::Link {
                    route: leaf.route.clone(),
                    title: leaf.title.clone(),
                    active,
                    anchors,
                }
            }
        }
    }
}

/// Mark every folder whose route is an ancestor of `current` as expanded.
///
/// Walks the whole tree rather than pruning at collapsed folders, so deep
/// branches are tracked even when an outer section is closed.
fn mark_active_ancestors(nodes: &[NavNode], current: &str, state: &ExpansionState) {
    for node in nodes {
        if let NavNode::Folder(folder) = node {
            if route::is_ancestor(&folder.route, current) {
                state.mark_active_ancestor(&folder.route);
            }
            mark_active_ancestors(&folder.children, current, state);
        }
    }
}
