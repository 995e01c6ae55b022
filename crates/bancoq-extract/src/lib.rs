use std::path::Path;

use thiserror::Error;

pub mod backend;
#[cfg(feature = "backend-lopdf")]
mod lopdf_backend;
#[cfg(feature = "backend-pdf-extract")]
mod pdf_extract_backend;

pub use backend::{PdfBackend, available_backends, select_backend};
#[cfg(feature = "backend-lopdf")]
pub use lopdf_backend::LopdfBackend;
#[cfg(feature = "backend-pdf-extract")]
pub use pdf_extract_backend::PdfExtractBackend;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no PDF text backend available; rebuild with a backend feature enabled")]
    NoBackend,
    #[error("failed to open document: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a plain-text dump verbatim. No normalization of any kind happens
/// here; the parser expects raw file contents.
pub fn read_text_file(path: &Path) -> Result<String, ExtractError> {
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_text_file_passthrough() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let content = "Banco de Preguntas: X\r\n1. P?\n  A: r  \n";
        file.write_all(content.as_bytes()).unwrap();
        let text = read_text_file(file.path()).unwrap();
        assert_eq!(text, content);
    }

    #[test]
    fn test_read_text_file_missing() {
        let err = read_text_file(Path::new("no_such_file.txt")).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
