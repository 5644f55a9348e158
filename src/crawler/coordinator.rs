//! Crawl coordinator - main crawl orchestration logic
//!
//! Drives the full pipeline: pop a page from the frontier, fetch it, split
//! its links into PDF candidates and further pages, dispatch PDFs to the
//! classifier, and append every outcome to the report. Individual page or
//! PDF failures are recorded and the crawl continues; only an unreachable
//! start URL aborts a run.

use crate::classify::{PdfCandidate, PdfClassifier};
use crate::config::{self, CrawlOptions};
use crate::crawler::{extract_links, CrawlTarget, FetchedBody, Fetcher, Frontier};
use crate::report::{CrawlReport, PdfFinding, ReportBuilder};
use crate::urlutil::{dedup_key, same_host};
use crate::CrawlError;
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Skip note for PDF links discovered during a dry run
const NOTE_DRY_RUN: &str = "dry-run (not downloaded)";

/// Skip note for a dry-run PDF that arrived through a page fetch; its bytes
/// were transferred but never saved or analyzed
const NOTE_DRY_RUN_RESPONSE: &str = "dry-run (not analyzed)";

/// Skip note for external-host PDFs when external PDFs are not included
const NOTE_EXTERNAL: &str = "external domain";

/// Single-owner crawl driver
///
/// Owns the frontier, the seen-PDF set, and the growing report exclusively;
/// collaborators only ever receive values. One instance per run.
pub struct Coordinator {
    options: CrawlOptions,
    fetcher: Fetcher,
    classifier: PdfClassifier,
    frontier: Frontier,
    seen_pdfs: HashSet<String>,
    report: ReportBuilder,
    pages_fetched: usize,
    page_limit_reached: bool,
    pdf_order: u64,
}

impl Coordinator {
    /// Creates a coordinator for one run
    ///
    /// Validates the options up front; invalid options are the only failures
    /// that surface before crawling starts.
    pub fn new(
        options: CrawlOptions,
        classifier: PdfClassifier,
        started_at: DateTime<Local>,
    ) -> Result<Self, CrawlError> {
        config::validate(&options)?;

        let fetcher = Fetcher::new(
            Duration::from_secs(options.timeout_secs),
            options.max_bytes,
        )?;
        let report = ReportBuilder::new(options.clone(), started_at);

        Ok(Self {
            options,
            fetcher,
            classifier,
            frontier: Frontier::new(),
            seen_pdfs: HashSet::new(),
            report,
            pages_fetched: 0,
            page_limit_reached: false,
            pdf_order: 0,
        })
    }

    /// Runs the crawl to completion and produces the finalized report
    ///
    /// Terminates when the frontier empties or the page ceiling is reached;
    /// hitting the ceiling is recorded in the report, not treated as failure.
    pub async fn run(mut self) -> Result<CrawlReport, CrawlError> {
        tracing::info!("Starting crawl at {}", self.options.start_url);

        self.frontier.push(CrawlTarget {
            url: self.options.start_url.clone(),
            depth: 0,
            source_page: None,
        });

        while let Some(target) = self.frontier.pop() {
            if self.pages_fetched >= self.options.effective_page_limit() {
                self.page_limit_reached = true;
                tracing::info!(
                    "Page ceiling of {} reached, stopping",
                    self.options.effective_page_limit()
                );
                break;
            }
            self.pages_fetched += 1;

            tracing::debug!("Fetching page: {}", target.url);
            match self.fetcher.fetch(&target.url).await {
                Ok(body) => self.process_page(&target, body).await,
                Err(e) if self.pages_fetched == 1 => {
                    // The start page itself is unreachable; nothing to crawl.
                    return Err(CrawlError::StartUrlUnreachable {
                        url: target.url.to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch page {}: {}", target.url, e);
                }
            }
        }

        tracing::info!(
            "Crawl completed: {} pages fetched, {} PDFs found",
            self.pages_fetched,
            self.report.len()
        );

        Ok(self
            .report
            .finalize(self.pages_fetched, self.page_limit_reached))
    }

    /// Processes one fetched page: extract links, dispatch PDFs, grow frontier
    async fn process_page(&mut self, target: &CrawlTarget, body: FetchedBody) {
        // A page link can turn out to serve a PDF directly; route it to the
        // classifier instead of parsing it as HTML.
        if body.is_pdf() {
            let source = target
                .source_page
                .clone()
                .unwrap_or_else(|| self.options.start_url.clone());
            self.handle_pdf_response(target.url.clone(), source, body);
            return;
        }

        if !body.is_html() {
            tracing::debug!(
                "Skipping non-HTML page {} ({})",
                target.url,
                body.content_type.as_deref().unwrap_or("no content type")
            );
            return;
        }

        let html = String::from_utf8_lossy(&body.body);
        let links = extract_links(&html, &target.url);
        tracing::debug!(
            "Page {}: {} PDF links, {} page links",
            target.url,
            links.pdf_links.len(),
            links.page_links.len()
        );

        for pdf_url in links.pdf_links {
            self.handle_pdf_link(pdf_url, target.url.clone()).await;
        }

        if self.options.recursive {
            for page_url in links.page_links {
                self.maybe_enqueue_page(page_url, target);
            }
        }
    }

    /// Enqueues a page link if it is in scope and the ceiling allows it
    fn maybe_enqueue_page(&mut self, page_url: Url, from: &CrawlTarget) {
        if !same_host(&self.options.start_url, &page_url) {
            return;
        }

        if self.frontier.is_visited(&page_url) {
            return;
        }

        if self.frontier.visited_count() >= self.options.effective_page_limit() {
            self.page_limit_reached = true;
            return;
        }

        self.frontier.push(CrawlTarget {
            url: page_url,
            depth: from.depth + 1,
            source_page: Some(from.url.clone()),
        });
    }

    /// Dispatches one discovered PDF link
    ///
    /// Dedup happens here: each distinct PDF URL yields exactly one finding
    /// no matter how many pages link to it.
    async fn handle_pdf_link(&mut self, pdf_url: Url, source_page: Url) {
        let Some(candidate) = self.admit_candidate(pdf_url, source_page) else {
            return;
        };

        if self.options.dry_run {
            self.report
                .append(PdfFinding::skipped(&candidate, NOTE_DRY_RUN));
            return;
        }

        if self.is_external_pdf_out_of_scope(&candidate.url) {
            tracing::debug!("Skipping external PDF: {}", candidate.url);
            self.report
                .append(PdfFinding::skipped(&candidate, NOTE_EXTERNAL));
            return;
        }

        tracing::info!("Downloading PDF: {}", candidate.url);
        match self.fetcher.fetch(&candidate.url).await {
            Ok(body) => {
                let finding = self.classifier.classify(&candidate, &body);
                self.report.append(finding);
            }
            Err(e) => {
                tracing::warn!("Failed to download PDF {}: {}", candidate.url, e);
                self.report
                    .append(PdfFinding::download_error(&candidate, &e));
            }
        }
    }

    /// Handles a PDF that arrived through a page fetch (content-type detection)
    fn handle_pdf_response(&mut self, pdf_url: Url, source_page: Url, body: FetchedBody) {
        let Some(candidate) = self.admit_candidate(pdf_url, source_page) else {
            return;
        };

        if self.options.dry_run {
            self.report
                .append(PdfFinding::skipped(&candidate, NOTE_DRY_RUN_RESPONSE));
            return;
        }

        let finding = self.classifier.classify(&candidate, &body);
        self.report.append(finding);
    }

    /// Admits a PDF URL into the run, or rejects a duplicate
    fn admit_candidate(&mut self, pdf_url: Url, source_page: Url) -> Option<PdfCandidate> {
        if !self.seen_pdfs.insert(dedup_key(&pdf_url)) {
            tracing::debug!("Already seen PDF, skipping: {}", pdf_url);
            return None;
        }

        let order = self.pdf_order;
        self.pdf_order += 1;

        Some(PdfCandidate {
            url: pdf_url,
            source_page,
            order,
        })
    }

    /// Host-gating for PDF downloads
    ///
    /// Applies only to recursive runs: a single-page scan keeps every PDF
    /// found on that page in scope.
    fn is_external_pdf_out_of_scope(&self, pdf_url: &Url) -> bool {
        self.options.recursive
            && !self.options.include_external_pdfs
            && !same_host(&self.options.start_url, pdf_url)
    }
}
