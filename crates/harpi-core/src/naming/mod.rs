//! Participant and resource naming for HAR entries.
//!
//! Every function here is pure: the same entry always yields the same name,
//! which is what lets the sequence compiler deduplicate participants by name.

mod path;

pub use path::{last_named_segment, last_path_segment};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::archive::Entry;

/// Name used when no annotation, host or path segment is usable.
pub const FALLBACK_SERVICE: &str = "Service";

/// Resource name used when no annotation or path segment is usable.
pub const FALLBACK_RESOURCE: &str = "resource";

/// Display name of the implicit originating participant.
pub const DEFAULT_CALLER: &str = "User Agent";

/// Knobs for name inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingOptions {
    /// Display name of the caller participant (always id 0).
    pub caller_name: String,
    /// Infer resources from the nearest non-numeric path segment
    /// (`/widgets/42` → `widgets`) instead of the literal last one.
    pub skip_numeric_segments: bool,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            caller_name: DEFAULT_CALLER.to_string(),
            skip_numeric_segments: true,
        }
    }
}

/// Resolves the participant an entry talks to.
///
/// First non-empty of: explicit annotation, URL host, last path segment.
/// The winner is stripped of surrounding slashes; if nothing is left the
/// result is [`FALLBACK_SERVICE`].
pub fn service_name(entry: &Entry) -> String {
    let url = Url::parse(&entry.request.url).ok();
    service_name_for(entry, url.as_ref())
}

pub(crate) fn service_name_for(entry: &Entry, url: Option<&Url>) -> String {
    let candidate = entry
        .service_annotation()
        .or_else(|| url.and_then(Url::host_str).filter(|h| !h.is_empty()))
        .or_else(|| url.and_then(last_path_segment));

    candidate
        .map(normalize)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_SERVICE.to_string())
}

/// Resolves the resource an entry operates on: explicit annotation, then a
/// URL path segment, then [`FALLBACK_RESOURCE`].
pub fn resource_name(entry: &Entry, options: &NamingOptions) -> String {
    let url = Url::parse(&entry.request.url).ok();
    resource_name_for(entry, url.as_ref(), options)
}

pub(crate) fn resource_name_for(
    entry: &Entry,
    url: Option<&Url>,
    options: &NamingOptions,
) -> String {
    entry
        .resource_annotation()
        .or_else(|| url.and_then(|u| resource_segment(u, options)))
        .map(normalize)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_RESOURCE.to_string())
}

fn resource_segment<'a>(url: &'a Url, options: &NamingOptions) -> Option<&'a str> {
    if options.skip_numeric_segments {
        last_named_segment(url)
    } else {
        last_path_segment(url)
    }
}

fn normalize(name: &str) -> &str {
    name.trim_matches(|c: char| c == '/' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str) -> Entry {
        Entry::new("GET", url, 200)
    }

    #[test]
    fn service_prefers_annotation() {
        let mut e = entry("https://svc.example.com/widgets");
        e.service_name = Some("Orders".into());
        assert_eq!(service_name(&e), "Orders");
    }

    #[test]
    fn service_uses_host() {
        assert_eq!(
            service_name(&entry("https://svc.example.com/widgets/42")),
            "svc.example.com"
        );
        assert_eq!(
            service_name(&entry("http://127.0.0.1:8080/health")),
            "127.0.0.1"
        );
    }

    #[test]
    fn service_without_host_uses_last_segment() {
        assert_eq!(service_name(&entry("file:///srv/billing/")), "billing");
    }

    #[test]
    fn service_unparseable_url_falls_back() {
        assert_eq!(service_name(&entry("not a url")), FALLBACK_SERVICE);
        assert_eq!(service_name(&entry("/relative/path")), FALLBACK_SERVICE);
    }

    #[test]
    fn service_normalizes_slashes() {
        let mut e = entry("https://svc.example.com/");
        e.request.service_name = Some("/inventory/".into());
        assert_eq!(service_name(&e), "inventory");

        e.request.service_name = Some("//".into());
        assert_eq!(service_name(&e), FALLBACK_SERVICE);
    }

    #[test]
    fn service_is_stable_across_calls() {
        let e = entry("https://svc.example.com/a");
        assert_eq!(service_name(&e), service_name(&e));
    }

    #[test]
    fn resource_prefers_annotation() {
        let mut e = entry("https://svc.example.com/widgets/42");
        e.resource_name = Some("gadget".into());
        assert_eq!(resource_name(&e, &NamingOptions::default()), "gadget");
    }

    #[test]
    fn resource_skips_numeric_by_default() {
        let e = entry("https://svc.example.com/widgets/42");
        assert_eq!(resource_name(&e, &NamingOptions::default()), "widgets");
    }

    #[test]
    fn resource_literal_last_segment_when_configured() {
        let e = entry("https://svc.example.com/widgets/42");
        let opts = NamingOptions {
            skip_numeric_segments: false,
            ..NamingOptions::default()
        };
        assert_eq!(resource_name(&e, &opts), "42");
    }

    #[test]
    fn resource_fallbacks() {
        let opts = NamingOptions::default();
        assert_eq!(resource_name(&entry("https://svc.example.com/"), &opts), FALLBACK_RESOURCE);
        assert_eq!(resource_name(&entry("::bad::"), &opts), FALLBACK_RESOURCE);
    }
}
