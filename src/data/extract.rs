//! PDF text extraction.
//!
//! Thin adapter over `pdf-extract`. Layout is not preserved beyond what the
//! library already emits; scanned documents simply produce no text.

use std::path::Path;

use tracing::{debug, instrument};

use super::LoadError;

const PAGE_SEPARATOR: char = '\x0c';

/// Extract the text of every page in the PDF at `path`, pages joined by newlines.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn extract_pdf_text(path: &Path) -> Result<String, LoadError> {
    let raw = pdf_extract::extract_text(path).map_err(|e| LoadError::Extract {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let text = join_pages(&raw);
    debug!(chars = text.len(), "extracted pdf text");
    Ok(text)
}

/// Replace page separators with line boundaries.
///
/// Without this the last line of one page and the first line of the next
/// could end up on a single line.
pub fn join_pages(raw: &str) -> String {
    raw.replace(PAGE_SEPARATOR, "\n")
}
