//! Resume extraction engine.
//!
//! A pure, synchronous, single-pass heuristic pipeline: raw text is
//! normalized into lines, sections are located by header aliases, split
//! into entries, and independent field extractors each fill one part
//! of the final [`ResumeRecord`]. Every heuristic miss degrades to an
//! empty or default value; the only fatal condition is an unsupported
//! document format, rejected before any text processing begins.

pub mod contact;
pub mod education;
pub mod experience;
pub mod name;
pub mod normalize;
pub mod patterns;
pub mod projects;
pub mod sections;
pub mod skills;

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentFormat};
use crate::models::record::ResumeRecord;

/// Parses a raw document payload into a structured record.
/// The text-extraction collaborator for `format` runs first; its output is
/// treated as opaque text.
pub fn parse_document(bytes: &[u8], format: DocumentFormat) -> Result<ResumeRecord, AppError> {
    let text = extract_text(bytes, format)?;
    Ok(parse_resume(&text))
}

/// Assembles the record from the five field extractors. The extractors are
/// independent of each other and share only the read-only pattern library,
/// so concurrent parses need no coordination.
pub fn parse_resume(text: &str) -> ResumeRecord {
    let lines = normalize::normalize_lines(text);

    ResumeRecord {
        name: name::extract_name(&lines),
        contact: contact::extract_contact(text),
        skills: skills::extract_skills(text),
        experience: experience::extract_experience(text),
        education: education::extract_education(text),
        projects: projects::extract_projects(text),
    }
}
