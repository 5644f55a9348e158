//! `pdftotext`-backed text extraction (poppler-utils)
//!
//! Only run when a text layer was detected and text capture was requested.
//! The dump is for manual review; it never influences the verdict.

use crate::classify::pdffonts::{spawn_error, truncate};
use crate::classify::{TextDumper, ToolError};
use std::path::Path;
use std::process::Command;

const TOOL: &str = "pdftotext";

/// Text dumper that shells out to `pdftotext`
#[derive(Debug, Default)]
pub struct PdftotextDumper;

impl TextDumper for PdftotextDumper {
    fn dump(&self, pdf_path: &Path, out_txt: &Path) -> Result<(), ToolError> {
        let output = Command::new(TOOL)
            .args(["-layout", "-enc", "UTF-8"])
            .arg(pdf_path)
            .arg(out_txt)
            .output()
            .map_err(|e| spawn_error(TOOL, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::Invocation {
                tool: TOOL,
                message: truncate(stderr.trim(), 200),
            });
        }

        Ok(())
    }
}
