//! Crawl pipeline: fetching, link extraction, frontier management, and the
//! coordinator that drives them
//!
//! The pipeline is deliberately single-threaded: pages and PDFs are processed
//! one at a time in frontier order, so the visited set, the frontier, and the
//! growing report are never mutated concurrently and runs are reproducible.

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::Coordinator;
pub use fetcher::{FetchError, FetchedBody, Fetcher, USER_AGENT};
pub use frontier::{CrawlTarget, Frontier};
pub use parser::{extract_links, ExtractedLinks};
