//! Skills extractor — section tokens with a keyword-vocabulary fallback.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::normalize::title_case;
use crate::parser::patterns::{header, BULLET};
use crate::parser::sections::find_section;

const MAX_SKILLS: usize = 20;
/// Single characters left over after delimiter splitting are noise.
const MIN_TOKEN_CHARS: usize = 2;

const ALIASES: &[&str] = &["skills", "technical skills", "core competencies", "competencies"];

static HEADERS: Lazy<Vec<Regex>> =
    Lazy::new(|| ALIASES.iter().map(|alias| header(alias)).collect());

/// Vocabulary scanned when no skills section is found: languages,
/// frameworks, tools, and methodologies commonly named in resumes.
const TECH_KEYWORDS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "react",
    "node",
    "sql",
    "html",
    "css",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "linux",
    "mongodb",
    "postgresql",
    "django",
    "flask",
    "fastapi",
    "vue",
    "angular",
    "typescript",
    "c++",
    "c#",
    "machine learning",
    "ai",
    "data science",
    "agile",
    "scrum",
];

/// Ordered skills, source order, capped at 20. Deduplication is not
/// guaranteed for section-sourced tokens.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut skills = Vec::new();

    if let Some(section) = find_section(text, &HEADERS) {
        for line in section.lines() {
            let line = BULLET.replace(line.trim(), "");
            for item in line.split([',', ';', '|']) {
                let token = item.trim();
                if token.chars().count() >= MIN_TOKEN_CHARS {
                    skills.push(token.to_string());
                }
            }
        }
    }

    // No section, or a section that yielded nothing: scan the whole text
    // for known tech keywords instead.
    if skills.is_empty() {
        let lower = text.to_lowercase();
        for keyword in TECH_KEYWORDS {
            let titled = title_case(keyword);
            if lower.contains(keyword) && !skills.contains(&titled) {
                skills.push(titled);
            }
        }
    }

    skills.truncate(MAX_SKILLS);
    skills
}
