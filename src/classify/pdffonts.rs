//! `pdffonts`-backed text inspection (poppler-utils)
//!
//! `pdffonts` prints a two-line header followed by one row per embedded font.
//! The row count is the signal: zero rows means no font objects and therefore
//! no text layer.

use crate::classify::{FontReport, TextInspector, ToolError};
use std::path::Path;
use std::process::Command;

const TOOL: &str = "pdffonts";

/// Text inspector that shells out to `pdffonts`
#[derive(Debug, Default)]
pub struct PdffontsInspector;

impl TextInspector for PdffontsInspector {
    fn inspect(&self, pdf_path: &Path) -> Result<FontReport, ToolError> {
        let output = Command::new(TOOL)
            .arg(pdf_path)
            .output()
            .map_err(|e| spawn_error(TOOL, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::Invocation {
                tool: TOOL,
                message: truncate(stderr.trim(), 200),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(FontReport {
            fonts_count: count_font_rows(&stdout),
        })
    }
}

/// Counts font rows in `pdffonts` output
///
/// Any non-empty line that is neither the `name ...` header nor the dashed
/// separator is treated as a font row.
fn count_font_rows(stdout: &str) -> u32 {
    stdout
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .filter(|line| {
            let lower = line.to_ascii_lowercase();
            !lower.starts_with("name") && !line.starts_with("---")
        })
        .count() as u32
}

pub(crate) fn spawn_error(tool: &'static str, e: std::io::Error) -> ToolError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ToolError::NotInstalled { tool }
    } else {
        ToolError::Invocation {
            tool,
            message: e.to_string(),
        }
    }
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITH_FONTS: &str = "\
name                                 type              encoding         emb sub uni object ID
------------------------------------ ----------------- ---------------- --- --- --- ---------
DejaVuSans                           CID TrueType      Identity-H       yes no  yes     10  0
Helvetica                            Type 1            WinAnsi          no  no  no      12  0
";

    const NO_FONTS: &str = "\
name                                 type              encoding         emb sub uni object ID
------------------------------------ ----------------- ---------------- --- --- --- ---------
";

    #[test]
    fn test_count_font_rows() {
        assert_eq!(count_font_rows(WITH_FONTS), 2);
    }

    #[test]
    fn test_headers_only_means_zero_fonts() {
        assert_eq!(count_font_rows(NO_FONTS), 0);
    }

    #[test]
    fn test_empty_output_means_zero_fonts() {
        assert_eq!(count_font_rows(""), 0);
        assert_eq!(count_font_rows("\n\n"), 0);
    }

    #[test]
    fn test_truncate_long_message() {
        let long = "x".repeat(500);
        assert_eq!(truncate(&long, 200).len(), 200);
        assert_eq!(truncate("short", 200), "short");
    }

    #[test]
    fn test_missing_binary_maps_to_not_installed() {
        let err = spawn_error(
            TOOL,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(matches!(err, ToolError::NotInstalled { tool: "pdffonts" }));
    }
}
