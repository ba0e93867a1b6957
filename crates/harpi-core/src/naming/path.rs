//! Path segment extraction from parsed URLs.

use url::Url;

/// Last non-empty path segment, e.g. `42` for `https://h/widgets/42/`.
///
/// Returns `None` for root paths and URLs that cannot carry a path.
pub fn last_path_segment(url: &Url) -> Option<&str> {
    url.path_segments()?.filter(|s| !s.is_empty()).last()
}

/// Nearest non-numeric segment scanning from the end, so `/widgets/42`
/// names `widgets`. Falls back to the last segment when all are numeric.
pub fn last_named_segment(url: &Url) -> Option<&str> {
    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    segments
        .iter()
        .rev()
        .find(|s| !is_numeric(s))
        .or_else(|| segments.last())
        .copied()
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
