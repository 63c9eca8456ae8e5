//! Structured resume record — the sole output type of the extraction engine.
//!
//! Every string field is either meaningful or empty, never absent; the one
//! exception is `ContactInfo`, whose channels are omitted from JSON entirely
//! when not found. The record is plain owned data: it carries no identity
//! beyond position in its owning list and no state shared across parses.

use serde::{Deserialize, Serialize};

/// Fallback used when no name-shaped line is found near the top of the document.
pub const NAME_PLACEHOLDER: &str = "Your Name";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub contact: ContactInfo,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        ResumeRecord {
            name: NAME_PLACEHOLDER.to_string(),
            contact: ContactInfo::default(),
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
        }
    }
}

/// Contact channels recovered from the document. Values are normalized:
/// phone numbers reformatted to `NNN-NNN-NNNN` when exactly 10 digits were
/// recovered, URLs prefixed with `https://` when the scheme was missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.phone.is_none()
            && self.linkedin.is_none()
            && self.github.is_none()
            && self.website.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    /// May be empty when no company could be separated from the header line.
    pub company: String,
    /// Raw matched date-range substring, or empty when none was found.
    pub dates: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    /// Empty when the entry had a single line.
    pub school: String,
    /// First 4-digit year in 1900–2099 found in the entry, or empty.
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_uses_placeholder_name() {
        let record = ResumeRecord::default();
        assert_eq!(record.name, NAME_PLACEHOLDER);
        assert!(record.contact.is_empty());
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_contact_json_omits_absent_channels() {
        let contact = ContactInfo {
            email: Some("jane@x.com".to_string()),
            ..ContactInfo::default()
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["email"], "jane@x.com");
        assert!(json.get("phone").is_none());
        assert!(json.get("website").is_none());
    }

    #[test]
    fn test_contact_is_empty() {
        assert!(ContactInfo::default().is_empty());
        let contact = ContactInfo {
            github: Some("https://github.com/janedoe".to_string()),
            ..ContactInfo::default()
        };
        assert!(!contact.is_empty());
    }
}
