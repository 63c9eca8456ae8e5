//! Text normalizer: raw document text → ordered trimmed lines.
//!
//! The full raw text is kept alongside the lines by the caller; whole-document
//! pattern searches (a phone number split across formatting, for instance)
//! run against the raw text where line boundaries don't matter.

/// Splits raw text on line breaks, trims each line, and drops empty results.
/// Order is preserved.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Upper-cases the first letter of each whitespace-separated word and
/// lower-cases the rest, joining with single spaces.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_drops_empty_lines() {
        let lines = normalize_lines("  Jane Smith  \n\n\t\n jane@x.com\n");
        assert_eq!(lines, vec!["Jane Smith", "jane@x.com"]);
    }

    #[test]
    fn test_normalize_preserves_order() {
        let lines = normalize_lines("first\nsecond\nthird");
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("  \n \t \n").is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("JANE SMITH"), "Jane Smith");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("c++"), "C++");
    }
}
