//! Contact extractor — email, phone, and profile/website URLs from full text.

use crate::models::record::ContactInfo;
use crate::parser::patterns::{EMAIL, PHONE, URL};

/// Only the first URLs in document order are classified.
const URL_SCAN_LIMIT: usize = 3;

pub fn extract_contact(text: &str) -> ContactInfo {
    let mut contact = ContactInfo::default();

    if let Some(m) = EMAIL.find(text) {
        contact.email = Some(m.as_str().to_string());
    }

    if let Some(m) = PHONE.find(text) {
        contact.phone = Some(normalize_phone(m.as_str()));
    }

    for m in URL.find_iter(text).take(URL_SCAN_LIMIT) {
        let url = m.as_str();
        let lower = url.to_lowercase();
        if lower.contains("linkedin") {
            contact.linkedin = Some(with_scheme(url));
        } else if lower.contains("github") {
            contact.github = Some(with_scheme(url));
        } else if contact.linkedin.is_none()
            && contact.github.is_none()
            && contact.website.is_none()
        {
            contact.website = Some(with_scheme(url));
        }
    }

    contact
}

/// Strips everything but digits and `+`; exactly 10 recovered digits are
/// regrouped as `NNN-NNN-NNNN`, any other length is left as the stripped
/// string.
fn normalize_phone(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if stripped.len() == 10 && stripped.chars().all(|c| c.is_ascii_digit()) {
        format!("{}-{}-{}", &stripped[..3], &stripped[3..6], &stripped[6..])
    } else {
        stripped
    }
}

/// Prefixes `https://` when the URL carries no scheme. Idempotent.
fn with_scheme(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
