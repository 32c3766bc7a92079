//! GitHub-style slug generation.

use std::collections::HashMap;

/// Convert heading text to a URL-safe slug.
///
/// Lowercases the text, maps each whitespace character to a dash, keeps
/// alphanumerics along with `-` and `_`, and drops everything else.
/// Consecutive spaces are not collapsed, so slugs stay aligned with the
/// fragment identifiers the content pipeline generates for headings.
///
/// # Examples
///
/// ```
/// use sidenav_anchors::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("FAQ & Answers"), "faq--answers");
/// assert_eq!(slugify("What's new?"), "whats-new");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            result.extend(c.to_lowercase());
        } else if c.is_whitespace() {
            result.push('-');
        }
    }
    result
}

/// Slug generator that keeps slugs unique within one page.
///
/// Duplicate heading texts get numeric suffixes (`faq`, `faq-1`, `faq-2`);
/// a suffixed slug that is itself taken keeps counting until a free one is
/// found. One instance covers one anchor list; a new page render starts
/// with a fresh instance.
#[derive(Debug, Default)]
pub struct Slugger {
    /// Slugs handed out so far, with the next suffix per base slug.
    occupied: HashMap<String, usize>,
}

impl Slugger {
    /// Create a slugger with no slugs taken.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a unique slug for the given heading text.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut result = base.clone();
        while self.occupied.contains_key(&result) {
            let count = self.occupied.entry(base.clone()).or_default();
            *count += 1;
            result = format!("{base}-{count}");
        }
        self.occupied.insert(result.clone(), 0);
        result
    }
}
