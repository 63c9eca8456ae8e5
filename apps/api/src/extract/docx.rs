//! DOCX text extraction.
//!
//! A DOCX file is a ZIP container; the body text lives in
//! `word/document.xml`. The part is streamed with `quick-xml`, collecting
//! `<w:t>` text runs and emitting one newline per closed paragraph, which
//! yields the paragraph-by-paragraph reading order the parser expects.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::errors::AppError;

pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::Extraction(format!("not a DOCX container: {e}")))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| AppError::Extraction(format!("missing document part: {e}")))?
        .read_to_string(&mut document_xml)
        .map_err(|e| AppError::Extraction(format!("unreadable document part: {e}")))?;

    collect_paragraph_text(&document_xml)
}

fn collect_paragraph_text(xml: &str) -> Result<String, AppError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| AppError::Extraction(format!("malformed document XML: {e}")))?;
        match event {
            Event::Start(start) if start.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(end) => match end.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(empty) if empty.name().as_ref() == b"w:br" => text.push('\n'),
            Event::Text(run) if in_text_run => {
                let value = run
                    .unescape()
                    .map_err(|e| AppError::Extraction(format!("bad text run: {e}")))?;
                text.push_str(&value);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn docx_with_body(body_xml: &str) -> Vec<u8> {
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body_xml}</w:body></w:document>"#
        );

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let bytes = docx_with_body(
            "<w:p><w:r><w:t>Jane Smith</w:t></w:r></w:p><w:p><w:r><w:t>jane@x.com</w:t></w:r></w:p>",
        );
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "Jane Smith\njane@x.com\n");
    }

    #[test]
    fn test_runs_within_a_paragraph_are_joined() {
        let bytes = docx_with_body(
            "<w:p><w:r><w:t>Jane </w:t></w:r><w:r><w:t>Smith</w:t></w:r></w:p>",
        );
        assert_eq!(extract_text(&bytes).unwrap(), "Jane Smith\n");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let bytes = docx_with_body("<w:p><w:r><w:t>R&amp;D Lead</w:t></w:r></w:p>");
        assert_eq!(extract_text(&bytes).unwrap(), "R&D Lead\n");
    }

    #[test]
    fn test_explicit_line_break() {
        let bytes =
            docx_with_body("<w:p><w:r><w:t>one</w:t><w:br/><w:t>two</w:t></w:r></w:p>");
        assert_eq!(extract_text(&bytes).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_non_zip_payload_is_an_extraction_error() {
        assert!(matches!(
            extract_text(b"plain text"),
            Err(AppError::Extraction(_))
        ));
    }

    #[test]
    fn test_zip_without_document_part_is_an_extraction_error() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("unrelated.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hello").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(
            extract_text(&bytes),
            Err(AppError::Extraction(_))
        ));
    }
}
