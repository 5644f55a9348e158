//! Tabular report writer
//!
//! One flat row per discovered PDF, same data as the JSON document.

use crate::report::CrawlReport;
use crate::Result;
use std::path::Path;

const HEADERS: [&str; 17] = [
    "pdf_url",
    "source_page",
    "http_status",
    "content_type",
    "bytes_downloaded",
    "sha256",
    "verdict",
    "fonts_count",
    "pdftotext_ran",
    "pdftotext_ok",
    "pdftotext_output",
    "pdftotext_bytes",
    "pdftotext_chars",
    "text_density",
    "conformance",
    "status",
    "notes",
];

/// Writes the tabular report to `path`
pub fn write_csv(report: &CrawlReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADERS)?;

    for finding in &report.findings {
        writer.write_record([
            finding.pdf_url.clone(),
            finding.source_page.clone(),
            opt_field(finding.http_status),
            finding.content_type.clone().unwrap_or_default(),
            opt_field(finding.bytes_downloaded),
            finding.sha256.clone().unwrap_or_default(),
            finding.verdict.to_string(),
            opt_field(finding.fonts_count),
            finding.pdftotext_ran.to_string(),
            opt_field(finding.pdftotext_ok),
            finding.pdftotext_output.clone().unwrap_or_default(),
            opt_field(finding.pdftotext_bytes),
            opt_field(finding.pdftotext_chars),
            finding
                .text_density
                .map(|d| format!("{:.6}", d))
                .unwrap_or_default(),
            finding
                .conformance
                .map(|c| c.to_string())
                .unwrap_or_default(),
            finding.status.to_string(),
            finding.notes.join("; "),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn opt_field<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{PdfCandidate, TextVerdict};
    use crate::config::CrawlOptions;
    use crate::report::{PdfFinding, ReportBuilder};
    use chrono::Local;
    use url::Url;

    fn sample_report() -> CrawlReport {
        let options = CrawlOptions::new(Url::parse("https://example.com/").unwrap());
        let mut builder = ReportBuilder::new(options, Local::now());

        let candidate = PdfCandidate {
            url: Url::parse("https://example.com/a.pdf").unwrap(),
            source_page: Url::parse("https://example.com/").unwrap(),
            order: 0,
        };
        let mut finding = PdfFinding::base(&candidate);
        finding.verdict = TextVerdict::ImageOnly;
        finding.fonts_count = Some(0);
        finding.bytes_downloaded = Some(1234);
        builder.append(finding);

        builder.finalize(1, false)
    }

    #[test]
    fn test_csv_row_per_finding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_csv(&sample_report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2); // header + one row
        assert!(lines[0].starts_with("pdf_url,source_page"));
        assert!(lines[1].contains("image_only"));
        assert!(lines[1].contains("1234"));
        assert!(lines[1].contains(",ok,"));
    }

    #[test]
    fn test_header_width_matches_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_csv(&sample_report(), &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), HEADERS.len());
        for record in reader.records() {
            assert_eq!(record.unwrap().len(), HEADERS.len());
        }
    }
}
