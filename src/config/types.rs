use serde::Serialize;
use std::path::PathBuf;
use url::Url;

/// Default per-PDF byte ceiling (50 MB)
pub const DEFAULT_MAX_BYTES: u64 = 50_000_000;

/// Default page ceiling for recursive crawls
pub const DEFAULT_MAX_PAGES: usize = 200;

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Options in effect for a single crawl run
///
/// Serialized into the structured report so a run records the configuration
/// that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlOptions {
    /// Starting URL to scan for PDF links
    pub start_url: Url,

    /// Follow same-host page links (default: scan only the given page)
    pub recursive: bool,

    /// Discover PDFs but never download or analyze them
    pub dry_run: bool,

    /// Also download PDFs hosted on external domains
    pub include_external_pdfs: bool,

    /// Maximum size of a single PDF in bytes
    pub max_bytes: u64,

    /// Maximum number of pages to fetch when recursive
    pub max_pages: usize,

    /// HTTP timeout per request, in seconds
    pub timeout_secs: u64,

    /// Output directory; each run writes under a timestamped subdirectory
    #[serde(skip)]
    pub out_dir: PathBuf,

    /// Dump extracted text for review when a text layer is detected
    pub pdftotext: bool,

    /// Run the PDF/UA conformance checker on each downloaded PDF
    pub verapdf: bool,
}

impl CrawlOptions {
    /// Creates options for the given start URL with all defaults
    pub fn new(start_url: Url) -> Self {
        Self {
            start_url,
            recursive: false,
            dry_run: false,
            include_external_pdfs: false,
            max_bytes: DEFAULT_MAX_BYTES,
            max_pages: DEFAULT_MAX_PAGES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            out_dir: PathBuf::from("out"),
            pdftotext: false,
            verapdf: false,
        }
    }

    /// The effective page ceiling: a non-recursive run fetches exactly one page
    pub fn effective_page_limit(&self) -> usize {
        if self.recursive {
            self.max_pages
        } else {
            1
        }
    }
}
