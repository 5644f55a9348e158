//! Report aggregation and output
//!
//! Findings accumulate in memory during the crawl and are serialized once at
//! the end of the run into two isomorphic shapes: a flat CSV table (one row
//! per PDF) and a structured JSON document (run metadata plus the finding
//! list). Both carry identical data.

mod aggregator;
mod csv_output;
mod json_output;
mod summary;
mod types;

pub use aggregator::{CrawlReport, ReportBuilder, RunTotals};
pub use csv_output::write_csv;
pub use json_output::write_json;
pub use summary::print_summary;
pub use types::{PdfFinding, ProcessingStatus};
