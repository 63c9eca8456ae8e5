//! PDF text extraction via `pdf-extract`, pages concatenated in reading order.

use crate::errors::AppError;

pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("failed to read PDF: {e}")))
}
