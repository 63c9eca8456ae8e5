//! Shared pattern library for the extraction engine.
//!
//! All matchers are compiled once and shared read-only across concurrent
//! parses. Matching is deliberately permissive — resumes have no fixed
//! grammar, so over-matching is acceptable and the extractors downstream
//! apply length and shape filters.

use once_cell::sync::Lazy;
use regex::Regex;

/// Standard `local@domain` shape with a dot-separated TLD of 2+ letters.
pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// US-style phone: optional +1, optional parens around the area code,
/// hyphen/dot/space separators, 10 digits total.
pub static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());

/// `http(s)://…`, bare `www.…`, or scheme-less linkedin.com / github.com paths.
pub static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://\S+|www\.\S+|linkedin\.com/\S+|github\.com/\S+").unwrap()
});

/// `[MM/]YYYY <dash> [MM/]YYYY|present|current`, dash any of `-–—`.
pub static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\d{1,2}[/-])?\d{4}\s*[-–—]\s*(?:(?:\d{1,2}[/-])?\d{4}|present|current)")
        .unwrap()
});

/// Bare 4-digit year starting with 19 or 20.
pub static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Year-like or `MM/YYYY`-like token used by the entry-splitting fallback.
pub static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}|\d{1,2}/\d{4}|\d{1,2}-\d{4}").unwrap());

/// Leading bullet marker on a description or skills line.
pub static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•\-\*]\s*").unwrap());

/// A line that looks like a new top-level section header: at least 6
/// characters of upper-case letters and whitespace on its own line.
pub static NEXT_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*[A-Z][A-Z\s]{5,}\s*\n").unwrap());

/// Builds the anchored header matcher for one section alias: the alias at
/// line start, immediately followed by end-of-line, `:`, or `|`.
/// Extractor modules compile their alias lists once into `Lazy` statics.
pub fn header(alias: &str) -> Regex {
    Regex::new(&format!(r"(?im)^\s*{}\s*(?:$|:|\|)", regex::escape(alias)))
        .expect("escaped alias is a valid pattern")
}
