//! pdf-a11y-crawl: a PDF accessibility triage crawler
//!
//! This crate crawls a starting web page (optionally following same-host
//! links breadth-first), discovers PDF documents, and triages each one for
//! accessibility risk. The primary signal is text presence: a PDF whose font
//! inspection reports zero fonts is flagged as image-only, the highest-risk
//! category for screen reader users. An optional PDF/UA conformance check can
//! be recorded alongside, but never changes the text verdict.

pub mod classify;
pub mod config;
pub mod crawler;
pub mod report;
pub mod urlutil;

use thiserror::Error;

/// Main error type for crawl runs
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Start URL unreachable: {url}: {reason}")]
    StartUrlUnreachable { url: String, reason: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("CSV report error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON report error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// These abort the run before any crawling begins. Every other failure class
/// is converted into a report entry and the crawl continues.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid start URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported URL scheme: {0} (only http and https are crawled)")]
    InvalidScheme(String),

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use classify::{ConformanceOutcome, PdfClassifier, TextVerdict};
pub use config::CrawlOptions;
pub use crawler::Coordinator;
pub use report::{CrawlReport, PdfFinding, ProcessingStatus};
