use std::path::Path;

use crate::{ExtractError, PdfBackend};

/// Text extraction via `lopdf`, page by page.
///
/// Fallback backend: less faithful to reading order on complex layouts than
/// pdf-extract, but handles some malformed files the latter rejects.
#[derive(Debug, Default)]
pub struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let doc = lopdf::Document::load(path).map_err(|e| ExtractError::Open(e.to_string()))?;

        let mut text = String::new();
        for page_number in doc.get_pages().keys() {
            let page_text = doc
                .extract_text(&[*page_number])
                .map_err(|e| ExtractError::Extraction(e.to_string()))?;
            if !page_text.is_empty() {
                text.push_str(&page_text);
                text.push('\n');
            }
        }
        Ok(text)
    }
}
