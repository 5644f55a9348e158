//! pdf-a11y-crawl main entry point
//!
//! Command-line interface for the PDF accessibility triage crawler.

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use pdf_a11y_crawl::classify::PdfClassifier;
use pdf_a11y_crawl::config::{
    CrawlOptions, DEFAULT_MAX_BYTES, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS,
};
use pdf_a11y_crawl::crawler::Coordinator;
use pdf_a11y_crawl::report::{print_summary, write_csv, write_json};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Crawl a web page and identify PDF files, then analyze them for basic
/// accessibility characteristics such as text presence (image-only
/// detection) and optional PDF/UA checks.
///
/// By default only the given page is scanned; --recursive follows links on
/// the same site. Findings are written as CSV and JSON reports under a
/// timestamped run directory.
#[derive(Parser, Debug)]
#[command(name = "pdf-a11y-crawl")]
#[command(version)]
#[command(about = "Crawl a site for PDF links and triage accessibility risk", long_about = None)]
struct Cli {
    /// Starting URL to scan for PDF links
    #[arg(value_name = "URL")]
    url: String,

    /// Follow links on the same site (default: off)
    #[arg(long)]
    recursive: bool,

    /// Discover PDFs but do not download or analyze them
    #[arg(long)]
    dry_run: bool,

    /// Also scan PDFs hosted on external domains
    #[arg(long)]
    include_external_pdfs: bool,

    /// Maximum size of a PDF in bytes (default: 50MB)
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES)]
    max_bytes: u64,

    /// Maximum number of pages to crawl when using --recursive
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Output directory
    #[arg(long, default_value = "out")]
    out: PathBuf,

    /// Dump extracted text for review when a text layer is detected
    #[arg(long)]
    pdftotext: bool,

    /// Run veraPDF to check PDF/UA compliance (slower)
    #[arg(long)]
    verapdf: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let start_url = Url::parse(&cli.url)
        .with_context(|| format!("invalid start URL: {}", cli.url))?;

    let options = CrawlOptions {
        start_url,
        recursive: cli.recursive,
        dry_run: cli.dry_run,
        include_external_pdfs: cli.include_external_pdfs,
        max_bytes: cli.max_bytes,
        max_pages: cli.max_pages,
        timeout_secs: cli.timeout,
        out_dir: cli.out,
        pdftotext: cli.pdftotext,
        verapdf: cli.verapdf,
    };

    let started_at = Local::now();
    let run_dir = options
        .out_dir
        .join(started_at.format("%Y%m%d-%H%M%S").to_string());
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create run directory {}", run_dir.display()))?;

    let classifier = PdfClassifier::new(&run_dir, &options);
    let coordinator = Coordinator::new(options, classifier, started_at)?;

    let report = coordinator.run().await?;

    let csv_path = run_dir.join("report.csv");
    let json_path = run_dir.join("report.json");
    write_csv(&report, &csv_path)?;
    write_json(&report, &json_path)?;

    print_summary(&report, &csv_path, &json_path);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pdf_a11y_crawl=info,warn"),
            1 => EnvFilter::new("pdf_a11y_crawl=debug,info"),
            2 => EnvFilter::new("pdf_a11y_crawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
