//! Anchor links and scroll-position tracking.

use std::collections::HashSet;
use std::sync::Mutex;

use serde::Serialize;

use crate::slugger::Slugger;

/// An anchor link beneath the active page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnchorLink {
    /// URL fragment identifier for the heading.
    pub slug: String,
    /// Heading text as displayed.
    pub text: String,
    /// Whether this anchor is the highlighted one.
    pub active: bool,
}

/// Scroll-position collaborator.
///
/// Reports whether the heading identified by a slug is currently visible.
/// The sidebar never observes scrolling itself; hosts feed their scroll
/// observer through this seam.
pub trait ScrollTracker: Send + Sync {
    /// True when the heading for `slug` is in the viewport.
    fn in_view(&self, slug: &str) -> bool;
}

/// [`ScrollTracker`] that never reports a visible heading.
///
/// Used before any scroll signal arrives; the first anchor of the active
/// page stays highlighted.
pub struct NullScrollTracker;

impl ScrollTracker for NullScrollTracker {
    fn in_view(&self, _slug: &str) -> bool {
        false
    }
}

/// [`ScrollTracker`] backed by a shared set of visible heading slugs.
///
/// Hosts update the set from their scroll observer while the sidebar
/// reads it when resolving anchor highlighting.
#[derive(Debug, Default)]
pub struct VisibleHeadings {
    slugs: Mutex<HashSet<String>>,
}

impl VisibleHeadings {
    /// Create a tracker with no visible headings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a heading entered the viewport.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn enter(&self, slug: &str) {
        self.slugs.lock().unwrap().insert(slug.to_owned());
    }

    /// Record that a heading left the viewport.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn leave(&self, slug: &str) {
        self.slugs.lock().unwrap().remove(slug);
    }
}

impl ScrollTracker for VisibleHeadings {
    fn in_view(&self, slug: &str) -> bool {
        self.slugs.lock().unwrap().contains(slug)
    }
}

/// Resolve anchor texts into links with the highlighted entry marked.
///
/// Slugs are generated in document order with a fresh [`Slugger`], so
/// duplicate headings get stable numeric suffixes. The last anchor the
/// tracker reports in view wins the highlight; when none is reported the
/// first anchor is highlighted.
#[must_use]
pub fn resolve_anchors(texts: &[String], tracker: &dyn ScrollTracker) -> Vec<AnchorLink> {
    let mut slugger = Slugger::new();
    let mut links: Vec<AnchorLink> = texts
        .iter()
        .map(|text| AnchorLink {
            slug: slugger.slug(text),
            text: text.clone(),
            active: false,
        })
        .collect();

    if links.is_empty() {
        return links;
    }

    let mut active = 0;
    for (i, link) in links.iter().enumerate() {
        if tracker.in_view(&link.slug) {
            active = i;
        }
    }
    links[active].active = true;

    links
}
