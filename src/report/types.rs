use crate::classify::{ConformanceOutcome, PdfCandidate, TextVerdict};
use crate::crawler::FetchError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Processing status of one finding
///
/// Rendered as `ok`, `skipped`, or `error:<reason>` in both report shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingStatus {
    /// Downloaded and analyzed
    Ok,

    /// Discovered but deliberately not downloaded (dry-run, external domain)
    Skipped,

    /// Download or analysis failed; the reason code is carried inline
    Error(String),
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingStatus::Ok => write!(f, "ok"),
            ProcessingStatus::Skipped => write!(f, "skipped"),
            ProcessingStatus::Error(reason) => write!(f, "error:{}", reason),
        }
    }
}

impl Serialize for ProcessingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The result record for one discovered PDF
///
/// Every discovered PDF yields exactly one finding, including failures and
/// skips; nothing is silently dropped. Immutable once appended to the report.
#[derive(Debug, Clone, Serialize)]
pub struct PdfFinding {
    /// The PDF URL
    pub pdf_url: String,

    /// The page that linked to it
    pub source_page: String,

    /// Zero-based discovery order within the run
    pub discovery_order: u64,

    /// HTTP status of the download, when one was attempted and answered
    pub http_status: Option<u16>,

    /// Content-Type of the download response
    pub content_type: Option<String>,

    /// Size of the downloaded body in bytes
    pub bytes_downloaded: Option<u64>,

    /// SHA-256 of the downloaded body
    pub sha256: Option<String>,

    /// Text-presence verdict
    pub verdict: TextVerdict,

    /// Font count reported by the inspection tool, verbatim
    pub fonts_count: Option<u32>,

    /// Whether text extraction was attempted
    pub pdftotext_ran: bool,

    /// Whether text extraction succeeded, when attempted
    pub pdftotext_ok: Option<bool>,

    /// Path of the extracted-text artifact, when produced
    pub pdftotext_output: Option<String>,

    /// Size of the extracted text in bytes
    pub pdftotext_bytes: Option<u64>,

    /// Length of the extracted text in characters
    pub pdftotext_chars: Option<u64>,

    /// Extracted-text bytes divided by PDF bytes; a rough richness signal
    pub text_density: Option<f64>,

    /// PDF/UA conformance outcome, when the check was enabled
    pub conformance: Option<ConformanceOutcome>,

    /// Processing status
    pub status: ProcessingStatus,

    /// Human-readable notes and warnings accumulated during processing
    pub notes: Vec<String>,
}

impl PdfFinding {
    /// Blank finding for a candidate, before any download or analysis
    pub fn base(candidate: &PdfCandidate) -> Self {
        Self {
            pdf_url: candidate.url.to_string(),
            source_page: candidate.source_page.to_string(),
            discovery_order: candidate.order,
            http_status: None,
            content_type: None,
            bytes_downloaded: None,
            sha256: None,
            verdict: TextVerdict::Unknown,
            fonts_count: None,
            pdftotext_ran: false,
            pdftotext_ok: None,
            pdftotext_output: None,
            pdftotext_bytes: None,
            pdftotext_chars: None,
            text_density: None,
            conformance: None,
            status: ProcessingStatus::Ok,
            notes: Vec::new(),
        }
    }

    /// Finding for a PDF that was discovered but deliberately not downloaded
    pub fn skipped(candidate: &PdfCandidate, reason: &str) -> Self {
        let mut finding = Self::base(candidate);
        finding.status = ProcessingStatus::Skipped;
        finding.notes.push(reason.to_string());
        finding
    }

    /// Finding for a PDF whose download failed
    pub fn download_error(candidate: &PdfCandidate, err: &FetchError) -> Self {
        let mut finding = Self::base(candidate);
        if let FetchError::Http(status) = err {
            finding.http_status = Some(*status);
        }
        finding.status = ProcessingStatus::Error(err.reason_code());
        finding.notes.push(err.to_string());
        finding
    }
}
