//! Education extractor — degree/school/year entries.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::record::EducationEntry;
use crate::parser::patterns::{header, YEAR};
use crate::parser::sections::{find_section, split_entries};

const MAX_ENTRIES: usize = 3;

const ALIASES: &[&str] = &["education", "academic", "qualifications", "degrees"];

static HEADERS: Lazy<Vec<Regex>> =
    Lazy::new(|| ALIASES.iter().map(|alias| header(alias)).collect());

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let Some(section) = find_section(text, &HEADERS) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for chunk in split_entries(&section) {
        if let Some(entry) = parse_entry(&chunk) {
            entries.push(entry);
            if entries.len() == MAX_ENTRIES {
                break;
            }
        }
    }
    entries
}

fn parse_entry(chunk: &str) -> Option<EducationEntry> {
    let lines: Vec<&str> = chunk
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let degree = (*lines.first()?).to_string();
    let school = lines.get(1).map(|line| line.to_string()).unwrap_or_default();
    let year = YEAR
        .find(chunk)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    Some(EducationEntry {
        degree,
        school,
        year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_school_year() {
        let entries = extract_education(
            "EDUCATION\nBS Computer Science\nState University\nGraduated 2019\n",
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "BS Computer Science");
        assert_eq!(entries[0].school, "State University");
        assert_eq!(entries[0].year, "2019");
    }

    #[test]
    fn test_single_line_entry_has_empty_school() {
        let entries = extract_education("EDUCATION\nMS Mathematics\n");
        assert_eq!(entries[0].degree, "MS Mathematics");
        assert_eq!(entries[0].school, "");
        assert_eq!(entries[0].year, "");
    }

    #[test]
    fn test_first_plausible_year_wins() {
        let entries = extract_education("EDUCATION\nBA History, 2015 - 2019\nCollege\n");
        assert_eq!(entries[0].year, "2015");
    }

    #[test]
    fn test_capped_at_three() {
        let doc = "EDUCATION\nPhD\nUni A\n\nMS\nUni B\n\nBS\nUni C\n\nDiploma\nSchool D\n";
        let entries = extract_education(doc);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].degree, "BS");
    }

    #[test]
    fn test_missing_section_yields_empty() {
        assert!(extract_education("EXPERIENCE\nEngineer\n").is_empty());
    }
}
