//! URL handling for crawl scoping and deduplication
//!
//! Everything the crawler needs to reason about URLs lives here: resolving
//! hrefs against a base page, canonical keys for visited/seen sets, PDF link
//! detection, and same-host scoping.

mod normalize;
mod pdf;

pub use normalize::{dedup_key, resolve_link};
pub use pdf::{is_pdf_url, pdf_filename, same_host, sha256_hex};
