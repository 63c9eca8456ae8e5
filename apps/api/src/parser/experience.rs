//! Experience extractor — work-history entries from the experience section.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::record::ExperienceEntry;
use crate::parser::patterns::{header, BULLET, DATE_RANGE};
use crate::parser::sections::{find_section, split_entries};

const MAX_ENTRIES: usize = 5;
/// Description bullets shorter than this (after marker stripping) are noise.
const MIN_BULLET_CHARS: usize = 11;

const ALIASES: &[&str] = &[
    "experience",
    "work experience",
    "employment",
    "professional experience",
    "career",
    "employment history",
];

static HEADERS: Lazy<Vec<Regex>> =
    Lazy::new(|| ALIASES.iter().map(|alias| header(alias)).collect());

static AT_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+at\s+").unwrap());

/// At most the first five textually-ordered entries; entries with no usable
/// header line are dropped without counting toward the cap.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
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

fn parse_entry(chunk: &str) -> Option<ExperienceEntry> {
    let lines: Vec<&str> = chunk
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let first = *lines.first()?;

    let dates = DATE_RANGE
        .find(chunk)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    // Title/company separation, in priority order: pipe, " at ", second line.
    let mut title = first.to_string();
    let mut company = String::new();
    let mut company_line_consumed = false;

    if let Some((left, right)) = first.split_once('|') {
        title = left.trim().to_string();
        company = right.trim().to_string();
    } else if first.to_lowercase().contains(" at ") {
        if let Some(sep) = AT_SEPARATOR.find(first) {
            title = first[..sep.start()].trim().to_string();
            company = first[sep.end()..].trim().to_string();
        }
    } else if lines.len() > 1 {
        company = lines[1].to_string();
        company_line_consumed = true;
    }

    let skip = if company_line_consumed { 2 } else { 1 };
    let description = lines
        .iter()
        .skip(skip)
        .map(|line| BULLET.replace(line, "").to_string())
        .filter(|line| line.chars().count() >= MIN_BULLET_CHARS)
        .collect();

    Some(ExperienceEntry {
        title,
        company,
        dates,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_separated_header() {
        let entries = extract_experience(
            "EXPERIENCE\nEngineer | Acme\n2020-2022\nBuilt internal tooling for deployments.\n",
        );
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title, "Engineer");
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.dates, "2020-2022");
        assert_eq!(
            entry.description,
            vec!["Built internal tooling for deployments."]
        );
    }

    #[test]
    fn test_at_separated_header() {
        let entries = extract_experience(
            "EXPERIENCE\nSenior Engineer at Globex Corp\n2019 - present\nOwned the billing platform end to end.\n",
        );
        assert_eq!(entries[0].title, "Senior Engineer");
        assert_eq!(entries[0].company, "Globex Corp");
        assert_eq!(entries[0].dates, "2019 - present");
    }

    #[test]
    fn test_second_line_becomes_company() {
        let entries = extract_experience(
            "EXPERIENCE\nStaff Engineer\nInitech\nLed migration of the monolith to services.\n",
        );
        assert_eq!(entries[0].title, "Staff Engineer");
        assert_eq!(entries[0].company, "Initech");
        assert_eq!(
            entries[0].description,
            vec!["Led migration of the monolith to services."]
        );
    }

    #[test]
    fn test_short_description_lines_filtered() {
        let entries = extract_experience(
            "EXPERIENCE\nEngineer | Acme\n• ok\n• Shipped the new onboarding flow.\n",
        );
        assert_eq!(entries[0].description, vec!["Shipped the new onboarding flow."]);
    }

    #[test]
    fn test_missing_section_yields_empty() {
        assert!(extract_experience("SKILLS\nPython\n").is_empty());
    }

    #[test]
    fn test_seven_entries_truncated_to_five() {
        let mut doc = String::from("EXPERIENCE\n");
        for i in 1..=7 {
            doc.push_str(&format!(
                "Engineer {i} | Company {i}\nDid the number {i} thing well.\n\n"
            ));
        }
        let entries = extract_experience(&doc);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].title, "Engineer 1");
        assert_eq!(entries[4].title, "Engineer 5");
    }

    #[test]
    fn test_dates_keep_raw_matched_substring() {
        let entries =
            extract_experience("EXPERIENCE\nAnalyst | Globex\n06/2020 – 08/2021\nModeled churn with gradient boosting.\n");
        assert_eq!(entries[0].dates, "06/2020 – 08/2021");
    }
}
