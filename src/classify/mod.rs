//! PDF triage: text-presence detection and optional conformance checking
//!
//! The primary check asks an external font-inspection tool how many fonts a
//! PDF embeds. Zero fonts means there is no text layer to render, so the PDF
//! is classified image-only. Note the deliberate conflation inherited from
//! the tool contract: a genuinely empty or corrupt PDF also reports zero
//! fonts and is likewise reported as image-only; the tools give no signal to
//! tell the cases apart.
//!
//! Tool failures classify as `unknown`, never as image-only: the absence of a
//! usable result is not evidence of absence of text.
//!
//! All tool invocations sit behind narrow traits so tests can substitute
//! deterministic fakes for the real binaries.

mod classifier;
mod pdffonts;
mod pdftotext;
mod verapdf;

pub use classifier::PdfClassifier;
pub use pdffonts::PdffontsInspector;
pub use pdftotext::PdftotextDumper;
pub use verapdf::VerapdfChecker;

use serde::Serialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use url::Url;

/// Text-presence verdict for one PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextVerdict {
    /// One or more fonts reported: a text layer exists
    HasText,

    /// Zero fonts reported: image-only, high accessibility risk
    ImageOnly,

    /// Tool failure or skipped analysis; no claim either way
    Unknown,
}

impl fmt::Display for TextVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextVerdict::HasText => write!(f, "has_text"),
            TextVerdict::ImageOnly => write!(f, "image_only"),
            TextVerdict::Unknown => write!(f, "unknown"),
        }
    }
}

/// Outcome of the optional PDF/UA conformance check
///
/// Strictly informational and independent of the text verdict: a conformance
/// failure does not imply image-only and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConformanceOutcome {
    Passed,
    Failed,
    Unknown,
}

impl fmt::Display for ConformanceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConformanceOutcome::Passed => write!(f, "passed"),
            ConformanceOutcome::Failed => write!(f, "failed"),
            ConformanceOutcome::Unknown => write!(f, "unknown"),
        }
    }
}

/// External tool invocation errors
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{tool} is not installed")]
    NotInstalled { tool: &'static str },

    #[error("{tool} failed: {message}")]
    Invocation { tool: &'static str, message: String },

    #[error("{tool} produced unparseable output: {message}")]
    UnparseableOutput { tool: &'static str, message: String },
}

impl ToolError {
    /// Short reason code used in `error:<reason>` processing statuses
    pub fn reason_code(&self) -> String {
        match self {
            ToolError::NotInstalled { .. } | ToolError::Invocation { .. } => {
                "ToolInvocation".to_string()
            }
            ToolError::UnparseableOutput { .. } => "ToolOutputUnparseable".to_string(),
        }
    }
}

/// Font listing reported by the text-inspection tool
#[derive(Debug, Clone)]
pub struct FontReport {
    /// Number of font rows in the listing; zero means no text layer
    pub fonts_count: u32,
}

/// A discovered PDF awaiting analysis
///
/// Deduplicated by canonical URL before it reaches the classifier, so each
/// distinct PDF URL is analyzed at most once per run.
#[derive(Debug, Clone)]
pub struct PdfCandidate {
    /// The PDF URL
    pub url: Url,

    /// The page that linked to it
    pub source_page: Url,

    /// Zero-based discovery order within the run
    pub order: u64,
}

/// Text-inspection tool seam (`pdffonts` in production)
pub trait TextInspector {
    fn inspect(&self, pdf_path: &Path) -> Result<FontReport, ToolError>;
}

/// Text-extraction tool seam (`pdftotext` in production)
pub trait TextDumper {
    fn dump(&self, pdf_path: &Path, out_txt: &Path) -> Result<(), ToolError>;
}

/// Conformance-checker tool seam (`verapdf` in production)
pub trait ConformanceChecker {
    fn check(&self, pdf_path: &Path) -> Result<ConformanceOutcome, ToolError>;
}
