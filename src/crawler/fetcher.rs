//! Bounded HTTP fetcher
//!
//! Every request enforces two hard caps: a wall-clock timeout and a byte
//! ceiling. The ceiling is checked against the declared `Content-Length`
//! before the body is read and again while streaming chunks, so an oversized
//! or mislabeled response can never buffer unbounded data. Failed fetches are
//! recorded, never retried.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("pdf-a11y-crawl/", env!("CARGO_PKG_VERSION"));

/// Typed fetch failures
///
/// These never abort a crawl; the coordinator converts them into report
/// entries and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("response exceeded the byte ceiling of {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("HTTP status {0}")]
    Http(u16),

    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// Short reason code used in `error:<reason>` processing statuses
    pub fn reason_code(&self) -> String {
        match self {
            FetchError::Timeout => "Timeout".to_string(),
            FetchError::TooLarge { .. } => "TooLarge".to_string(),
            FetchError::Http(status) => format!("Http({})", status),
            FetchError::Network(_) => "NetworkError".to_string(),
        }
    }
}

/// A successfully fetched response body
#[derive(Debug)]
pub struct FetchedBody {
    /// Final URL after redirects
    pub final_url: Url,

    /// HTTP status code
    pub status: u16,

    /// Content-Type header value, if present
    pub content_type: Option<String>,

    /// Raw response bytes
    pub body: Vec<u8>,
}

impl FetchedBody {
    /// Whether the response declared an HTML content type
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.contains("text/html") || ct.contains("application/xhtml+xml"))
            .unwrap_or(false)
    }

    /// Whether the response declared a PDF content type
    ///
    /// Catches PDF links whose URL carries no `.pdf` extension.
    pub fn is_pdf(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("application/pdf"))
            .unwrap_or(false)
    }
}

/// HTTP fetcher with per-request timeout and byte-ceiling enforcement
pub struct Fetcher {
    client: Client,
    max_bytes: u64,
}

impl Fetcher {
    /// Builds a fetcher with the given caps
    ///
    /// Redirects are followed by the client; the timeout covers the whole
    /// request including the body read.
    pub fn new(timeout: Duration, max_bytes: u64) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, max_bytes })
    }

    /// Fetches a URL, enforcing the timeout and byte ceiling
    ///
    /// # Returns
    ///
    /// * `Ok(FetchedBody)` - 2xx response within both caps
    /// * `Err(FetchError)` - Typed failure; never panics, never retries
    pub async fn fetch(&self, url: &Url) -> Result<FetchedBody, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        if let Some(declared) = response.content_length() {
            if declared > self.max_bytes {
                return Err(FetchError::TooLarge {
                    limit: self.max_bytes,
                });
            }
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // Stream the body so the ceiling holds even without a Content-Length.
        let mut body: Vec<u8> = Vec::new();
        let mut response = response;
        while let Some(chunk) = response.chunk().await.map_err(classify_error)? {
            if (body.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(FetchError::TooLarge {
                    limit: self.max_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(FetchedBody {
            final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes() {
        assert_eq!(FetchError::Timeout.reason_code(), "Timeout");
        assert_eq!(
            FetchError::TooLarge { limit: 100 }.reason_code(),
            "TooLarge"
        );
        assert_eq!(FetchError::Http(404).reason_code(), "Http(404)");
        assert_eq!(
            FetchError::Network("dns failure".to_string()).reason_code(),
            "NetworkError"
        );
    }

    #[test]
    fn test_is_html() {
        let body = FetchedBody {
            final_url: Url::parse("https://example.com/").unwrap(),
            status: 200,
            content_type: Some("text/html; charset=utf-8".to_string()),
            body: vec![],
        };
        assert!(body.is_html());
        assert!(!body.is_pdf());
    }

    #[test]
    fn test_is_pdf() {
        let body = FetchedBody {
            final_url: Url::parse("https://example.com/x").unwrap(),
            status: 200,
            content_type: Some("application/pdf".to_string()),
            body: vec![],
        };
        assert!(body.is_pdf());
        assert!(!body.is_html());
    }

    #[test]
    fn test_missing_content_type_is_neither() {
        let body = FetchedBody {
            final_url: Url::parse("https://example.com/x").unwrap(),
            status: 200,
            content_type: None,
            body: vec![],
        };
        assert!(!body.is_html());
        assert!(!body.is_pdf());
    }

    // Timeout, byte-ceiling, and status handling are exercised end-to-end
    // with wiremock in tests/crawl_tests.rs.
}
