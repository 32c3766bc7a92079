//! Anchor links for documentation sidebars.
//!
//! Turns a page's heading outline into the anchor list shown beneath the
//! active page:
//!
//! - [`anchors_from_outline`]: filter an outline down to anchor texts
//! - [`Slugger`]: GitHub-style slugs with numeric suffixes for duplicates
//! - [`resolve_anchors`]: build [`AnchorLink`]s with the highlighted entry marked
//! - [`ScrollTracker`]: seam for the host's scroll observer
//!
//! # Example
//!
//! ```
//! use sidenav_anchors::{NullScrollTracker, Slugger, resolve_anchors};
//!
//! let mut slugger = Slugger::new();
//! assert_eq!(slugger.slug("Setup"), "setup");
//! assert_eq!(slugger.slug("Setup"), "setup-1");
//!
//! let anchors = vec!["Install".to_owned(), "Usage".to_owned()];
//! let links = resolve_anchors(&anchors, &NullScrollTracker);
//! assert!(links[0].active); // no scroll signal yet, first anchor wins
//! ```

mod anchor;
mod outline;
mod slugger;

pub use anchor::{AnchorLink, NullScrollTracker, ScrollTracker, VisibleHeadings, resolve_anchors};
pub use outline::{InlineSpan, OutlineNode, anchors_from_outline};
pub use slugger::{Slugger, slugify};
