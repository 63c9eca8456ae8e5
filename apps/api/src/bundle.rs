//! In-memory ZIP packaging of a generated portfolio bundle.

use std::io::{Cursor, Write};

use anyhow::Context;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::AppError;
use crate::site::SiteBundle;

/// Packs the site files into a deflate-compressed ZIP archive, laid out
/// under a `portfolio/` directory the way the download expects.
pub fn zip_site(site: &SiteBundle) -> Result<Vec<u8>, AppError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let entries = [
        ("portfolio/index.html", site.html.as_str()),
        ("portfolio/styles.css", site.css.as_str()),
    ];
    for (name, contents) in entries {
        writer
            .start_file(name, options)
            .with_context(|| format!("starting archive entry {name}"))
            .map_err(AppError::Internal)?;
        writer
            .write_all(contents.as_bytes())
            .with_context(|| format!("writing archive entry {name}"))
            .map_err(AppError::Internal)?;
    }

    let cursor = writer
        .finish()
        .context("finalizing portfolio archive")
        .map_err(AppError::Internal)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_archive_contains_site_files() {
        let site = SiteBundle {
            html: "<html>hi</html>".to_string(),
            css: "body {}".to_string(),
        };
        let bytes = zip_site(&site).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        assert_eq!(archive.len(), 2);

        let mut html = String::new();
        archive
            .by_name("portfolio/index.html")
            .unwrap()
            .read_to_string(&mut html)
            .unwrap();
        assert_eq!(html, "<html>hi</html>");

        let mut css = String::new();
        archive
            .by_name("portfolio/styles.css")
            .unwrap()
            .read_to_string(&mut css)
            .unwrap();
        assert_eq!(css, "body {}");
    }
}
