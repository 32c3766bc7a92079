//! Route normalization and matching.
//!
//! Navigation paths arrive from the host router in assorted shapes:
//! with fragments, with locale suffixes, with or without a trailing
//! slash, pointing at `index` pages. Everything here reduces them to a
//! comparable form; tree routes are assumed to already be in that form.

/// Normalize a navigation path for comparison against tree routes.
///
/// Drops everything from the first `#`, strips a `.{locale}` suffix at a
/// segment boundary when `locale` is given, and removes an `index`
/// segment (`/docs/index` identifies the same page as `/docs`). An empty
/// result becomes `/`.
///
/// # Examples
///
/// ```
/// use sidenav::route::normalize;
///
/// assert_eq!(normalize("/docs/intro#setup", None), "/docs/intro");
/// assert_eq!(normalize("/docs/intro.en/", Some("en")), "/docs/intro/");
/// assert_eq!(normalize("/docs/index", None), "/docs");
/// assert_eq!(normalize("/index", None), "/");
/// ```
#[must_use]
pub fn normalize(path: &str, locale: Option<&str>) -> String {
    let mut route = match path.split_once('#') {
        Some((before, _fragment)) => before.to_owned(),
        None => path.to_owned(),
    };

    if let Some(locale) = locale.filter(|l| !l.is_empty()) {
        route = strip_locale_suffix(&route, locale);
    }

    route = strip_index_segment(&route);

    if route.is_empty() {
        route.push('/');
    }
    route
}

/// True when `route` and `path` identify the same page.
///
/// Comparison is insensitive to a trailing `/` on either side.
///
/// # Examples
///
/// ```
/// use sidenav::route::routes_match;
///
/// assert!(routes_match("/docs/intro", "/docs/intro/"));
/// assert!(routes_match("/docs/intro/", "/docs/intro"));
/// assert!(!routes_match("/docs/intro", "/docs/introduction"));
/// ```
#[must_use]
pub fn routes_match(route: &str, path: &str) -> bool {
    with_trailing_slash(route) == with_trailing_slash(path)
}

/// True when the folder at `folder_route` lies on the path to `path`.
///
/// A folder counts as its own ancestor, so this also holds when the
/// folder's landing page is the one being read.
///
/// # Examples
///
/// ```
/// use sidenav::route::is_ancestor;
///
/// assert!(is_ancestor("/docs", "/docs/setup/install"));
/// assert!(is_ancestor("/docs", "/docs"));
/// assert!(!is_ancestor("/docs", "/docsearch"));
/// ```
#[must_use]
pub fn is_ancestor(folder_route: &str, path: &str) -> bool {
    with_trailing_slash(path).starts_with(&with_trailing_slash(folder_route))
}

fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_owned()
    } else {
        format!("{path}/")
    }
}

/// Remove the first `.{locale}` occurring at a segment boundary.
fn strip_locale_suffix(path: &str, locale: &str) -> String {
    let suffix = format!(".{locale}");
    let mut start = 0;
    while let Some(pos) = path[start..].find(&suffix) {
        let begin = start + pos;
        let end = begin + suffix.len();
        if path[end..].is_empty() || path[end..].starts_with('/') {
            return format!("{}{}", &path[..begin], &path[end..]);
        }
        start = begin + 1;
    }
    path.to_owned()
}

/// Remove the first `index` segment (trailing or mid-path).
fn strip_index_segment(path: &str) -> String {
    const SEGMENT: &str = "/index";

    let mut start = 0;
    while let Some(pos) = path[start..].find(SEGMENT) {
        let begin = start + pos;
        let end = begin + SEGMENT.len();
        if path[end..].is_empty() {
            return path[..begin].to_owned();
        }
        if path[end..].starts_with('/') {
            return format!("{}{}", &path[..begin], &path[end..]);
        }
        start = begin + 1;
    }
    path.to_owned()
}
