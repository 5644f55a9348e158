//! Run configuration for pdf-a11y-crawl
//!
//! Unlike a long-running crawler, every run is fully described by its
//! command-line flags, so configuration is a single validated struct rather
//! than a parsed file.

mod types;
mod validation;

pub use types::{CrawlOptions, DEFAULT_MAX_BYTES, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS};
pub use validation::validate;
