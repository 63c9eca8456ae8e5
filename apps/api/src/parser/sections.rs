//! Section locator and entry splitter.
//!
//! A section is found by trying header aliases in caller-supplied priority
//! order; its span runs from just after the header to the next line that
//! looks like a new top-level header, bounded by a hard size cap so the
//! engine stays linear in document size on adversarial input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::patterns::{DATE_TOKEN, NEXT_SECTION};

/// Hard cap on a section span when no terminating header is found sooner.
pub const SECTION_CAP: usize = 2000;

static BLANK_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Finds a section by trying each pre-compiled alias header in order.
/// Returns the trimmed span after the first alias that matches, ending at
/// the next top-level header or at [`SECTION_CAP`], whichever comes first.
pub fn find_section(text: &str, headers: &[Regex]) -> Option<String> {
    for header in headers {
        if let Some(found) = header.find(text) {
            let rest = &text[found.end()..];
            let limit = floor_char_boundary(rest, SECTION_CAP);
            let end = match NEXT_SECTION.find(rest) {
                Some(next) if next.start() < limit => next.start(),
                _ => limit,
            };
            return Some(rest[..end].trim().to_string());
        }
    }
    None
}

/// Partitions a section span into one trimmed chunk per logical entry.
///
/// Primary strategy: split on blank-line separators. Fallback when that
/// yields a single chunk: split before lines carrying a date-like token,
/// assuming each entry starts with its own date. If the fallback also
/// yields one chunk or fewer, the single lump is returned as-is.
pub fn split_entries(section: &str) -> Vec<String> {
    let entries = clean(BLANK_SEPARATOR.split(section).map(String::from));
    if entries.len() != 1 {
        return entries;
    }

    let dated = clean(split_before_dated_lines(section).into_iter());
    if dated.len() > 1 {
        return dated;
    }
    entries
}

/// Splits before every date-bearing line after the first one seen, so a
/// leading header line stays attached to the dates that follow it.
fn split_before_dated_lines(section: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut seen_date = false;

    for line in section.lines() {
        let dated = DATE_TOKEN.is_match(line);
        if dated && seen_date && !current.trim().is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
        seen_date = seen_date || dated;
    }
    chunks.push(current);
    chunks
}

fn clean(chunks: impl Iterator<Item = String>) -> Vec<String> {
    chunks
        .map(|chunk| chunk.trim().to_string())
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

/// Largest index not exceeding `max` that falls on a char boundary.
fn floor_char_boundary(text: &str, max: usize) -> usize {
    if text.len() <= max {
        return text.len();
    }
    let mut idx = max;
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
