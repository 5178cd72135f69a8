/*!
 * Page text extraction from source documents.
 *
 * The pipeline consumes an ordered sequence of per-page plain-text strings;
 * this module produces it. PDFs go through the pure-Rust pdf-extract crate,
 * and plain-text files use form-feed page breaks (the pdftotext convention),
 * which keeps the pipeline drivable without binary fixtures.
 */

use std::path::Path;
use log::{info, warn};

use crate::errors::ExtractionError;

/// Extracts ordered per-page text from a source document.
pub struct PageExtractor;

impl PageExtractor {
    /// Extract per-page text from the given file.
    ///
    /// Pages are returned in document order with their raw text trimmed.
    /// Fails when the file cannot be read or when no page yields any text -
    /// both are fatal before any chunk processing starts.
    pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ExtractionError> {
        let path = path.as_ref();

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let pages = match extension.as_str() {
            "pdf" => Self::extract_pdf_pages(path)?,
            "txt" | "text" => Self::extract_text_pages(path)?,
            other => {
                return Err(ExtractionError::UnsupportedFormat(format!(
                    "'{}' (expected pdf or txt)",
                    other
                )));
            }
        };

        if pages.iter().all(|p| p.trim().is_empty()) {
            return Err(ExtractionError::NoContent(path.display().to_string()));
        }

        info!("Extracted {} pages from {}", pages.len(), path.display());
        Ok(pages)
    }

    /// Per-page text from a PDF document
    fn extract_pdf_pages(path: &Path) -> Result<Vec<String>, ExtractionError> {
        let pages = pdf_extract::extract_text_by_pages(path)
            .map_err(|e| ExtractionError::ReadFailed(format!("{}: {}", path.display(), e)))?;

        let total = pages.len();
        let non_empty = pages.iter().filter(|p| !p.trim().is_empty()).count();
        if non_empty < total {
            warn!("{} of {} pages contained no extractable text", total - non_empty, total);
        }

        Ok(pages.into_iter().map(|p| p.trim().to_string()).collect())
    }

    /// Per-page text from a plain-text file with form-feed page breaks.
    ///
    /// A file without form feeds is a single page.
    fn extract_text_pages(path: &Path) -> Result<Vec<String>, ExtractionError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExtractionError::ReadFailed(format!("{}: {}", path.display(), e)))?;

        Ok(content
            .split('\u{c}')
            .map(|page| page.trim().to_string())
            .collect())
    }
}
