use sha2::{Digest, Sha256};
use url::Url;

/// Returns true if the URL looks like a PDF link
///
/// The check is on the resolved path only (query and fragment never count),
/// case-insensitive, matching `/a/b/file.PDF` as well as `file.pdf?dl=1`.
/// Links that merely serve `application/pdf` without the extension are caught
/// later, when the response content type is known.
pub fn is_pdf_url(url: &Url) -> bool {
    url.path().to_ascii_lowercase().ends_with(".pdf")
}

/// Returns true if both URLs share scheme and host (including port)
///
/// Used for crawl scoping: page links are only followed within the starting
/// origin, and PDF downloads are host-gated unless external PDFs are allowed.
pub fn same_host(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.host_str() == b.host_str()
        && a.port_or_known_default() == b.port_or_known_default()
}

/// Hex-encoded SHA-256 of a byte buffer
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Deterministic local filename for a downloaded PDF
///
/// Derived from the URL so re-runs write the same artifact names and two
/// distinct URLs never collide in the run directory.
pub fn pdf_filename(url: &Url) -> String {
    let digest = sha256_hex(url.as_str().as_bytes());
    format!("{}.pdf", &digest[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_detected() {
        let url = Url::parse("https://example.com/report.pdf").unwrap();
        assert!(is_pdf_url(&url));
    }

    #[test]
    fn test_pdf_extension_case_insensitive() {
        let url = Url::parse("https://example.com/REPORT.PDF").unwrap();
        assert!(is_pdf_url(&url));
    }

    #[test]
    fn test_pdf_with_query() {
        let url = Url::parse("https://example.com/report.pdf?dl=1").unwrap();
        assert!(is_pdf_url(&url));
    }

    #[test]
    fn test_html_page_not_pdf() {
        let url = Url::parse("https://example.com/report.html").unwrap();
        assert!(!is_pdf_url(&url));
    }

    #[test]
    fn test_pdf_in_directory_name_not_pdf() {
        let url = Url::parse("https://example.com/pdf/index.html").unwrap();
        assert!(!is_pdf_url(&url));
    }

    #[test]
    fn test_same_host_matches() {
        let a = Url::parse("https://example.com/a").unwrap();
        let b = Url::parse("https://example.com/b/c.pdf").unwrap();
        assert!(same_host(&a, &b));
    }

    #[test]
    fn test_same_host_rejects_other_domain() {
        let a = Url::parse("https://example.com/a").unwrap();
        let b = Url::parse("https://cdn.example.com/a").unwrap();
        assert!(!same_host(&a, &b));
    }

    #[test]
    fn test_same_host_rejects_scheme_mismatch() {
        let a = Url::parse("https://example.com/").unwrap();
        let b = Url::parse("http://example.com/").unwrap();
        assert!(!same_host(&a, &b));
    }

    #[test]
    fn test_same_host_rejects_port_mismatch() {
        let a = Url::parse("http://127.0.0.1:8080/").unwrap();
        let b = Url::parse("http://127.0.0.1:9090/").unwrap();
        assert!(!same_host(&a, &b));
    }

    #[test]
    fn test_pdf_filename_deterministic() {
        let url = Url::parse("https://example.com/report.pdf").unwrap();
        assert_eq!(pdf_filename(&url), pdf_filename(&url));
        assert!(pdf_filename(&url).ends_with(".pdf"));
        assert_eq!(pdf_filename(&url).len(), 16 + 4);
    }

    #[test]
    fn test_pdf_filename_differs_per_url() {
        let a = Url::parse("https://example.com/a.pdf").unwrap();
        let b = Url::parse("https://example.com/b.pdf").unwrap();
        assert_ne!(pdf_filename(&a), pdf_filename(&b));
    }
}
