//! End-of-run console summary

use crate::report::CrawlReport;
use std::path::Path;

/// Prints the run summary to stdout
pub fn print_summary(report: &CrawlReport, csv_path: &Path, json_path: &Path) {
    let totals = &report.totals;

    println!("\nDone.");
    println!("Pages visited: {}", totals.pages_visited);
    if totals.page_limit_reached {
        println!("  (page ceiling reached)");
    }
    println!("PDFs found: {}", totals.pdfs_found);
    println!("Text-based (fonts found): {}", totals.has_text);
    println!("Image-only (no fonts): {}", totals.image_only);
    println!("Unknown/failed: {}", totals.unknown);
    println!(
        "\nReports:\n  {}\n  {}",
        csv_path.display(),
        json_path.display()
    );

    if report.options.dry_run {
        println!("\nDry-run complete (no PDFs downloaded).");
    }
}
