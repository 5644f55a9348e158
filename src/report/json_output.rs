//! Structured report writer
//!
//! Nested run document: metadata, options in effect, totals, and the finding
//! list. Same data as the CSV table, different shape.

use crate::report::CrawlReport;
use crate::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes the structured report to `path`
pub fn write_json(report: &CrawlReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    Ok(())
}
