use crate::classify::{
    ConformanceChecker, PdfCandidate, PdffontsInspector, PdftotextDumper, TextDumper,
    TextInspector, TextVerdict, VerapdfChecker,
};
use crate::config::CrawlOptions;
use crate::crawler::FetchedBody;
use crate::report::{PdfFinding, ProcessingStatus};
use crate::urlutil::{pdf_filename, sha256_hex};
use std::fs;
use std::path::{Path, PathBuf};

/// Classifies downloaded PDFs into accessibility findings
///
/// Saves each PDF under the run directory, runs the text-inspection tool on
/// it, and optionally extracts text and checks PDF/UA conformance. Every call
/// produces exactly one finding; tool failures degrade the verdict to
/// `unknown` with an explanatory note instead of erroring out.
pub struct PdfClassifier {
    pdf_dir: PathBuf,
    text_dir: PathBuf,
    inspector: Box<dyn TextInspector>,
    dumper: Option<Box<dyn TextDumper>>,
    checker: Option<Box<dyn ConformanceChecker>>,
}

impl PdfClassifier {
    /// Builds a classifier with the real tool backends, wired per options
    pub fn new(run_dir: &Path, options: &CrawlOptions) -> Self {
        Self::with_backends(
            run_dir,
            Box::new(PdffontsInspector),
            options
                .pdftotext
                .then(|| Box::new(PdftotextDumper) as Box<dyn TextDumper>),
            options
                .verapdf
                .then(|| Box::new(VerapdfChecker) as Box<dyn ConformanceChecker>),
        )
    }

    /// Builds a classifier with explicit backends (test seam)
    pub fn with_backends(
        run_dir: &Path,
        inspector: Box<dyn TextInspector>,
        dumper: Option<Box<dyn TextDumper>>,
        checker: Option<Box<dyn ConformanceChecker>>,
    ) -> Self {
        Self {
            pdf_dir: run_dir.join("pdfs"),
            text_dir: run_dir.join("text"),
            inspector,
            dumper,
            checker,
        }
    }

    /// Classifies one downloaded PDF
    pub fn classify(&self, candidate: &PdfCandidate, body: &FetchedBody) -> PdfFinding {
        let mut finding = PdfFinding::base(candidate);
        finding.http_status = Some(body.status);
        finding.content_type = body.content_type.clone();
        finding.bytes_downloaded = Some(body.body.len() as u64);
        finding.sha256 = Some(sha256_hex(&body.body));

        let pdf_path = match self.save_pdf(candidate, &body.body) {
            Ok(path) => path,
            Err(e) => {
                finding.status = ProcessingStatus::Error("Io".to_string());
                finding.notes.push(format!("failed to save PDF: {}", e));
                return finding;
            }
        };

        match self.inspector.inspect(&pdf_path) {
            Ok(report) => {
                finding.fonts_count = Some(report.fonts_count);
                finding.verdict = if report.fonts_count == 0 {
                    TextVerdict::ImageOnly
                } else {
                    TextVerdict::HasText
                };
            }
            Err(e) => {
                finding.verdict = TextVerdict::Unknown;
                finding.status = ProcessingStatus::Error(e.reason_code());
                finding.notes.push(e.to_string());
            }
        }

        if finding.verdict == TextVerdict::HasText {
            if let Some(dumper) = &self.dumper {
                self.dump_text(dumper.as_ref(), &pdf_path, &mut finding);
            }
        }

        if let Some(checker) = &self.checker {
            finding.conformance = Some(match checker.check(&pdf_path) {
                Ok(outcome) => outcome,
                Err(e) => {
                    finding.notes.push(e.to_string());
                    crate::classify::ConformanceOutcome::Unknown
                }
            });
        }

        finding
    }

    fn save_pdf(&self, candidate: &PdfCandidate, bytes: &[u8]) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.pdf_dir)?;
        let path = self.pdf_dir.join(pdf_filename(&candidate.url));
        fs::write(&path, bytes)?;
        Ok(path)
    }

    fn dump_text(&self, dumper: &dyn TextDumper, pdf_path: &Path, finding: &mut PdfFinding) {
        finding.pdftotext_ran = true;

        let txt_path = match pdf_path.file_stem() {
            Some(stem) => self.text_dir.join(format!("{}.txt", stem.to_string_lossy())),
            None => return,
        };

        if let Err(e) = fs::create_dir_all(&self.text_dir) {
            finding.pdftotext_ok = Some(false);
            finding.notes.push(format!("pdftotext failed: {}", e));
            return;
        }

        match dumper.dump(pdf_path, &txt_path) {
            Ok(()) => match fs::read_to_string(&txt_path) {
                Ok(text) => {
                    finding.pdftotext_ok = Some(true);
                    finding.pdftotext_output = Some(txt_path.display().to_string());
                    finding.pdftotext_chars = Some(text.chars().count() as u64);
                    let text_bytes = text.len() as u64;
                    finding.pdftotext_bytes = Some(text_bytes);
                    if let Some(pdf_bytes) = finding.bytes_downloaded.filter(|b| *b > 0) {
                        finding.text_density = Some(text_bytes as f64 / pdf_bytes as f64);
                    }
                }
                Err(e) => {
                    finding.pdftotext_ok = Some(false);
                    finding.notes.push(format!("pdftotext read failed: {}", e));
                }
            },
            Err(e) => {
                finding.pdftotext_ok = Some(false);
                finding.notes.push(format!("pdftotext failed: {}", e));
            }
        }
    }
}
