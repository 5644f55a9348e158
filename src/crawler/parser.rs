//! HTML link extraction
//!
//! Splits the hyperlinks of a page into PDF links (sent to the classifier)
//! and page links (candidates for further crawling). Extraction is
//! best-effort: malformed fragments are skipped, never fatal.

use crate::urlutil::{dedup_key, is_pdf_url, resolve_link};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Links extracted from a single HTML document
#[derive(Debug, Clone, Default)]
pub struct ExtractedLinks {
    /// Links whose resolved path ends in `.pdf`, in discovery order
    pub pdf_links: Vec<Url>,

    /// All other same-protocol hyperlinks, in discovery order
    pub page_links: Vec<Url>,
}

/// Extracts and classifies all links from an HTML document
///
/// Every href is resolved against `base_url` to an absolute URL; fragments
/// are dropped and each document's links are deduplicated by canonical key
/// while preserving first-seen order.
///
/// # Example
///
/// ```
/// use pdf_a11y_crawl::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<a href="report.pdf">Report</a> <a href="/about">About</a>"#;
/// let base = Url::parse("https://example.com/docs/").unwrap();
/// let links = extract_links(html, &base);
/// assert_eq!(links.pdf_links.len(), 1);
/// assert_eq!(links.page_links.len(), 1);
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> ExtractedLinks {
    let document = Html::parse_document(html);
    let mut extracted = ExtractedLinks::default();
    let mut seen: HashSet<String> = HashSet::new();

    let Ok(selector) = Selector::parse("a[href]") else {
        return extracted;
    };

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(url) = resolve_link(href, base_url) else {
            continue;
        };

        if !seen.insert(dedup_key(&url)) {
            continue;
        }

        if is_pdf_url(&url) {
            extracted.pdf_links.push(url);
        } else {
            extracted.page_links.push(url);
        }
    }

    extracted
}
