//! WeasyPrint-backed rasterizer.
//!
//! Pipes the HTML document through the `weasyprint` executable
//! (stdin → stdout) and counts pages by parsing the resulting bytes
//! with lopdf. Kept behind the [`Rasterizer`] trait so the auto-fit
//! engine never touches subprocess plumbing.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{Rasterized, Rasterizer};
use crate::error::{Error, Result};

/// PDF file signature.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Rasterizer shelling out to the `weasyprint` executable.
pub struct WeasyPrint {
    command: PathBuf,
}

impl WeasyPrint {
    /// Use `weasyprint` from `PATH`.
    pub fn new() -> Self {
        Self {
            command: PathBuf::from("weasyprint"),
        }
    }

    /// Use a specific executable.
    pub fn with_command(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for WeasyPrint {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for WeasyPrint {
    fn rasterize(&self, html: &str) -> Result<Rasterized> {
        let mut child = Command::new(&self.command)
            .args(["--encoding", "utf-8", "-", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::Rasterize(format!(
                    "failed to launch '{}': {e}",
                    self.command.display()
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(html.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::Rasterize(format!(
                "weasyprint exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let pdf = output.stdout;
        if !pdf.starts_with(PDF_MAGIC) {
            return Err(Error::Rasterize(
                "weasyprint output does not carry a PDF signature".to_string(),
            ));
        }

        let page_count = count_pages(&pdf)?;
        Ok(Rasterized { pdf, page_count })
    }
}

/// Count the pages of an in-memory PDF document.
pub fn count_pages(pdf: &[u8]) -> Result<u32> {
    let doc = lopdf::Document::load_mem(pdf)?;
    Ok(doc.get_pages().len() as u32)
}
