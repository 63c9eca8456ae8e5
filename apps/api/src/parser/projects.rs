//! Projects extractor — named projects with bullet descriptions.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::record::ProjectEntry;
use crate::parser::patterns::{header, BULLET};
use crate::parser::sections::{find_section, split_entries};

const MAX_ENTRIES: usize = 5;
const MIN_BULLET_CHARS: usize = 11;

const ALIASES: &[&str] = &["projects", "project", "portfolio", "personal projects"];

static HEADERS: Lazy<Vec<Regex>> =
    Lazy::new(|| ALIASES.iter().map(|alias| header(alias)).collect());

pub fn extract_projects(text: &str) -> Vec<ProjectEntry> {
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

fn parse_entry(chunk: &str) -> Option<ProjectEntry> {
    let lines: Vec<&str> = chunk
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let name = (*lines.first()?).to_string();
    let description = lines
        .iter()
        .skip(1)
        .map(|line| BULLET.replace(line, "").to_string())
        .filter(|line| line.chars().count() >= MIN_BULLET_CHARS)
        .collect();

    Some(ProjectEntry { name, description })
}
