use url::{form_urlencoded, Url};

/// Resolves a link href against its page and validates it
///
/// The fragment is always dropped: `page#section` and `page` are the same
/// document for crawling purposes.
///
/// Returns `None` if the link should be excluded:
/// - `javascript:`, `mailto:`, `tel:` schemes
/// - `data:` URIs
/// - fragment-only links (same page anchors)
/// - invalid URLs, or non-HTTP(S) URLs after resolution
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(mut absolute) => {
            if absolute.scheme() != "http" && absolute.scheme() != "https" {
                return None;
            }
            absolute.set_fragment(None);
            Some(absolute)
        }
        Err(_) => None,
    }
}

/// Canonical comparison key for visited-page and seen-PDF deduplication
///
/// Two URLs that differ only in fragment or query-parameter order map to the
/// same key. The sorted pairs are re-encoded when the query is rebuilt, so an
/// escaped delimiter inside a value (`?a=1%26b%3D2`) can never collide with
/// the two-pair query it would decode to. The URL itself is left untouched;
/// the key is only ever compared, never fetched.
pub fn dedup_key(url: &Url) -> String {
    let mut canonical = url.clone();
    canonical.set_fragment(None);

    if canonical.query().is_some() {
        let mut pairs: Vec<(String, String)> = canonical
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        pairs.sort();

        if pairs.is_empty() {
            canonical.set_query(None);
        } else {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&pairs)
                .finish();
            canonical.set_query(Some(&query));
        }
    }

    canonical.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/docs/index.html").unwrap()
    }

    #[test]
    fn test_resolve_absolute_link() {
        let resolved = resolve_link("https://other.com/file.pdf", &base_url()).unwrap();
        assert_eq!(resolved.as_str(), "https://other.com/file.pdf");
    }

    #[test]
    fn test_resolve_relative_link() {
        let resolved = resolve_link("report.pdf", &base_url()).unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/docs/report.pdf");
    }

    #[test]
    fn test_resolve_root_relative_link() {
        let resolved = resolve_link("/annual.pdf", &base_url()).unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/annual.pdf");
    }

    #[test]
    fn test_fragment_dropped() {
        let resolved = resolve_link("/page#section-2", &base_url()).unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_skip_fragment_only() {
        assert!(resolve_link("#top", &base_url()).is_none());
    }

    #[test]
    fn test_skip_special_schemes() {
        for href in ["javascript:void(0)", "mailto:a@b.com", "tel:+123", "data:text/plain,x"] {
            assert!(resolve_link(href, &base_url()).is_none(), "{}", href);
        }
    }

    #[test]
    fn test_skip_non_http_after_resolution() {
        assert!(resolve_link("ftp://example.com/file.pdf", &base_url()).is_none());
    }

    #[test]
    fn test_skip_empty_href() {
        assert!(resolve_link("", &base_url()).is_none());
        assert!(resolve_link("   ", &base_url()).is_none());
    }

    #[test]
    fn test_dedup_key_ignores_fragment() {
        let a = Url::parse("https://example.com/doc.pdf#page=2").unwrap();
        let b = Url::parse("https://example.com/doc.pdf").unwrap();
        assert_eq!(dedup_key(&a), dedup_key(&b));
    }

    #[test]
    fn test_dedup_key_sorts_query_pairs() {
        let a = Url::parse("https://example.com/doc.pdf?b=2&a=1").unwrap();
        let b = Url::parse("https://example.com/doc.pdf?a=1&b=2").unwrap();
        assert_eq!(dedup_key(&a), dedup_key(&b));
    }

    #[test]
    fn test_dedup_key_keeps_escaped_delimiter_distinct() {
        // One pair with value "1&b=2" versus two separate pairs; these are
        // different URLs and must never share a key.
        let a = Url::parse("https://example.com/doc.pdf?a=1%26b%3D2").unwrap();
        let b = Url::parse("https://example.com/doc.pdf?a=1&b=2").unwrap();
        assert_ne!(dedup_key(&a), dedup_key(&b));
    }

    #[test]
    fn test_dedup_key_distinguishes_different_queries() {
        let a = Url::parse("https://example.com/doc.pdf?v=1").unwrap();
        let b = Url::parse("https://example.com/doc.pdf?v=2").unwrap();
        assert_ne!(dedup_key(&a), dedup_key(&b));
    }
}
