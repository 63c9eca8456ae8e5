//! Source-format text extraction collaborators.
//!
//! One extractor per supported document format, each recovering a
//! reading-order text stream from its binary layout. The engine treats
//! the output as opaque text; extractor failures on corrupt payloads
//! propagate unchanged.

mod docx;
mod pdf;

use crate::errors::AppError;

/// Supported upload formats, resolved from the uploaded filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves a format from a filename extension, case-insensitively.
    /// Anything else is the engine's one fatal error: unsupported format.
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(AppError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Extracts the text stream from a document payload.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, AppError> {
    match format {
        DocumentFormat::Pdf => pdf::extract_text(bytes),
        DocumentFormat::Docx => docx::extract_text(bytes),
    }
}
