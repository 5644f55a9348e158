use crate::classify::TextVerdict;
use crate::config::CrawlOptions;
use crate::report::{PdfFinding, ProcessingStatus};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Summary totals computed at finalization
#[derive(Debug, Clone, Serialize)]
pub struct RunTotals {
    pub pdfs_found: usize,
    pub has_text: usize,
    pub image_only: usize,
    pub unknown: usize,
    pub ok: usize,
    pub skipped: usize,
    pub errors: usize,
    pub pages_visited: usize,
    pub page_limit_reached: bool,
}

/// The finalized report for one crawl run
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    /// Tool name and version that produced the report
    pub tool: &'static str,
    pub version: &'static str,

    pub start_url: String,
    pub started_at: DateTime<Local>,

    /// Options in effect for this run
    pub options: CrawlOptions,

    pub totals: RunTotals,

    /// One finding per discovered PDF, in discovery order
    pub findings: Vec<PdfFinding>,
}

/// Order-preserving accumulator for findings plus run metadata
///
/// Owned exclusively by the run; findings are appended by value and never
/// mutated afterwards.
pub struct ReportBuilder {
    options: CrawlOptions,
    started_at: DateTime<Local>,
    findings: Vec<PdfFinding>,
}

impl ReportBuilder {
    pub fn new(options: CrawlOptions, started_at: DateTime<Local>) -> Self {
        Self {
            options,
            started_at,
            findings: Vec::new(),
        }
    }

    /// Appends a finding, preserving discovery order
    pub fn append(&mut self, finding: PdfFinding) {
        self.findings.push(finding);
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Computes totals and produces the final report
    pub fn finalize(self, pages_visited: usize, page_limit_reached: bool) -> CrawlReport {
        let mut totals = RunTotals {
            pdfs_found: self.findings.len(),
            has_text: 0,
            image_only: 0,
            unknown: 0,
            ok: 0,
            skipped: 0,
            errors: 0,
            pages_visited,
            page_limit_reached,
        };

        for finding in &self.findings {
            match finding.verdict {
                TextVerdict::HasText => totals.has_text += 1,
                TextVerdict::ImageOnly => totals.image_only += 1,
                TextVerdict::Unknown => totals.unknown += 1,
            }
            match finding.status {
                ProcessingStatus::Ok => totals.ok += 1,
                ProcessingStatus::Skipped => totals.skipped += 1,
                ProcessingStatus::Error(_) => totals.errors += 1,
            }
        }

        CrawlReport {
            tool: "pdf-a11y-crawl",
            version: env!("CARGO_PKG_VERSION"),
            start_url: self.options.start_url.to_string(),
            started_at: self.started_at,
            options: self.options,
            totals,
            findings: self.findings,
        }
    }
}
