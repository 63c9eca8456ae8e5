//! Axum route handler for the resume upload → portfolio bundle pipeline.

use axum::extract::Multipart;
use axum::http::{header, HeaderMap, HeaderValue};
use bytes::Bytes;
use tracing::info;

use crate::bundle::zip_site;
use crate::errors::AppError;
use crate::extract::DocumentFormat;
use crate::parser::parse_document;
use crate::site;

/// POST /upload-resume
///
/// Accepts a multipart form with a `file` field holding a PDF or DOCX
/// resume, parses it into a structured record, renders the portfolio
/// site, and responds with a ZIP of the bundle.
pub async fn handle_upload_resume(
    mut multipart: Multipart,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let (filename, data) = read_file_field(&mut multipart).await?;
    let format = DocumentFormat::from_filename(&filename)?;

    let record = parse_document(&data, format)?;
    info!(
        name = %record.name,
        skills = record.skills.len(),
        experience = record.experience.len(),
        "parsed resume"
    );

    let archive = zip_site(&site::generate(&record))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/zip"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=portfolio.zip"),
    );
    Ok((headers, archive))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("no file provided".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        return Ok((filename, data));
    }
    Err(AppError::Validation("no file provided".to_string()))
}
