use std::path::Path;

use crate::{ExtractError, PdfBackend};

/// Text extraction via the pure-Rust `pdf-extract` crate.
///
/// First in the preference order: no native libraries required, and its
/// per-page output matches what the parser was tuned against.
#[derive(Debug, Default)]
pub struct PdfExtractBackend;

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = std::fs::read(path)?;
        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| ExtractError::Extraction(e.to_string()))?;

        let mut text = String::new();
        for page_text in pages {
            if !page_text.is_empty() {
                text.push_str(&page_text);
                text.push('\n');
            }
        }
        Ok(text)
    }
}
