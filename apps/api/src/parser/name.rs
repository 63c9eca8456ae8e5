//! Name extractor — scans the top of the document for a name-shaped line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::record::NAME_PLACEHOLDER;
use crate::parser::normalize::title_case;

/// Only the first lines of the document are considered name candidates.
const SCAN_LINES: usize = 3;
const MAX_NAME_WORDS: usize = 4;

/// 2–4 capitalized words, e.g. `Jane Smith`.
static TITLE_CASE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3}$").unwrap());

/// 5–30 characters of upper-case letters and spaces, e.g. `JANE SMITH`.
static ALL_CAPS_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z\s]{5,30}$").unwrap());

/// Best-guess full name from the normalized lines; first match wins.
/// Falls back to the first line when it is short and digit-free, then to
/// the placeholder.
pub fn extract_name(lines: &[String]) -> String {
    for line in lines.iter().take(SCAN_LINES) {
        if TITLE_CASE_NAME.is_match(line) {
            return line.clone();
        }
        if ALL_CAPS_NAME.is_match(line) && line.split_whitespace().count() <= MAX_NAME_WORDS {
            return title_case(line);
        }
    }

    if let Some(first) = lines.first() {
        if first.split_whitespace().count() <= MAX_NAME_WORDS
            && !first.chars().any(|c| c.is_ascii_digit())
        {
            return first.clone();
        }
    }
    NAME_PLACEHOLDER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_title_case_name_taken_verbatim() {
        assert_eq!(extract_name(&lines(&["Jane Smith", "jane@x.com"])), "Jane Smith");
    }

    #[test]
    fn test_all_caps_name_converted_to_title_case() {
        assert_eq!(extract_name(&lines(&["JANE SMITH", "Engineer"])), "Jane Smith");
    }

    #[test]
    fn test_name_found_on_second_line() {
        assert_eq!(
            extract_name(&lines(&["resume", "Jane Smith", "jane@x.com"])),
            "Jane Smith"
        );
    }

    #[test]
    fn test_name_beyond_third_line_not_scanned() {
        let result = extract_name(&lines(&[
            "resume 2024",
            "for the attention of hiring managers everywhere",
            "confidential document",
            "Jane Smith",
        ]));
        assert_ne!(result, "Jane Smith");
    }

    #[test]
    fn test_fallback_uses_short_digit_free_first_line() {
        assert_eq!(
            extract_name(&lines(&["jane smith", "some other line"])),
            "jane smith"
        );
    }

    #[test]
    fn test_fallback_rejects_first_line_with_digits() {
        assert_eq!(extract_name(&lines(&["resume 2024", "objective"])), NAME_PLACEHOLDER);
    }

    #[test]
    fn test_placeholder_on_empty_input() {
        assert_eq!(extract_name(&[]), NAME_PLACEHOLDER);
    }

    #[test]
    fn test_too_many_words_falls_through() {
        assert_eq!(
            extract_name(&lines(&["one two three four five six"])),
            NAME_PLACEHOLDER
        );
    }
}
