//! The resume data model.
//!
//! These types mirror the JSON shape persisted by the backend, so every
//! field serializes under its camelCase wire name. Older payloads used a
//! handful of different field names (`responsibilities`, `current`,
//! `jobTitle`, `graduationDate`, `date`, `url`); those are accepted as
//! deserialization aliases but never written back out.

use serde::{Deserialize, Serialize};

/// A complete resume as handed to the renderer.
///
/// The renderer treats this as read-only input: list order is display
/// order, and no field is ever validated or mutated at this layer. A
/// record missing `full_name` or `email` still renders, with blanks where
/// the values would go.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub id: String,
    pub title: String,
    /// Selects the template design; unknown values fall back to the
    /// default template at render time.
    pub template_id: String,
    pub version: u32,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_title: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub experiences: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: SkillsData,
    pub projects: Vec<ProjectItem>,
    pub certifications: Vec<CertificationItem>,
}

/// One employment entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    #[serde(alias = "jobTitle")]
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// When set, the date range renders as ending in "Present" and any
    /// stored `end_date` is ignored.
    #[serde(alias = "current")]
    pub is_current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Bullet points; an empty list renders no bullet list at all.
    #[serde(alias = "responsibilities")]
    pub achievements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

/// One education entry. An absent `end_date` renders as "Present".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    /// Field of study.
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(alias = "graduationDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
}

/// Skill lists grouped by category. Every category is independently
/// optional; empty categories are omitted from the rendered output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsData {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
}

/// One project entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

/// One certification entry. `credential_id` is shown inline only when
/// present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationItem {
    pub id: String,
    pub name: String,
    pub issuer: String,
    #[serde(alias = "date")]
    pub issue_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(alias = "url", skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}
