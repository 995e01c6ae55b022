use std::path::Path;

use crate::ExtractError;

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level page-text extraction step; everything
/// downstream (line classification, structural parsing) is backend-agnostic.
/// The contract: per-page text concatenated with a trailing newline per page,
/// empty pages skipped.
pub trait PdfBackend: Send + Sync {
    /// Short stable identifier, used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Extract the full text content of a PDF file.
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
}

/// All compiled-in backends, in fixed preference order.
pub fn available_backends() -> Vec<Box<dyn PdfBackend>> {
    #[allow(unused_mut)]
    let mut backends: Vec<Box<dyn PdfBackend>> = Vec::new();
    #[cfg(feature = "backend-pdf-extract")]
    backends.push(Box::new(crate::pdf_extract_backend::PdfExtractBackend::default()));
    #[cfg(feature = "backend-lopdf")]
    backends.push(Box::new(crate::lopdf_backend::LopdfBackend::default()));
    backends
}

/// Pick the preferred backend. Fails before any file access when the build
/// carries no backend at all.
pub fn select_backend() -> Result<Box<dyn PdfBackend>, ExtractError> {
    let backend = available_backends()
        .into_iter()
        .next()
        .ok_or(ExtractError::NoBackend)?;
    tracing::debug!(backend = backend.name(), "selected PDF text backend");
    Ok(backend)
}
