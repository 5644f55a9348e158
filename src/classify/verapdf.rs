//! veraPDF-backed PDF/UA conformance checking
//!
//! veraPDF output and return codes vary by packaging, so the outcome is read
//! from pass/fail tokens in the combined output. Anything ambiguous is
//! `Unknown`. The result is informational only and never merged with the
//! text-presence verdict.

use crate::classify::pdffonts::spawn_error;
use crate::classify::{ConformanceChecker, ConformanceOutcome, ToolError};
use std::path::Path;
use std::process::Command;

const TOOL: &str = "verapdf";

/// Conformance checker that shells out to `verapdf` with the PDF/UA-1 profile
#[derive(Debug, Default)]
pub struct VerapdfChecker;

impl ConformanceChecker for VerapdfChecker {
    fn check(&self, pdf_path: &Path) -> Result<ConformanceOutcome, ToolError> {
        let output = Command::new(TOOL)
            .args(["--flavour", "ua1", "--format", "text"])
            .arg(pdf_path)
            .output()
            .map_err(|e| spawn_error(TOOL, e))?;

        let combined = format!(
            "{}\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );

        let outcome = interpret_output(&combined);
        if outcome == ConformanceOutcome::Unknown && !output.status.success() {
            return Err(ToolError::Invocation {
                tool: TOOL,
                message: format!("exit status {}", output.status),
            });
        }

        Ok(outcome)
    }
}

/// Reads a pass/fail outcome out of veraPDF's textual output
///
/// Any "fail" token wins over "pass"; with neither present the outcome is
/// unknown.
fn interpret_output(combined: &str) -> ConformanceOutcome {
    let lower = combined.to_lowercase();
    if lower.contains("fail") {
        ConformanceOutcome::Failed
    } else if lower.contains("pass") {
        ConformanceOutcome::Passed
    } else {
        ConformanceOutcome::Unknown
    }
}
