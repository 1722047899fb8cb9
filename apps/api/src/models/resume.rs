//! Parser output entities: the structured records handed to the composer.
//!
//! All of these are immutable value objects built fresh from one submission
//! and consumed immediately. Nothing here outlives a single request.

use serde::{Deserialize, Serialize};

/// A single job entry parsed from a free-text experience block.
///
/// `city`, `state`, and `years` are always present: when the header heuristic
/// cannot split the first line they are empty strings, never missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub city: String,
    pub state: String,
    /// Free-form date range text, e.g. "2019 to Present".
    pub years: String,
    pub title: String,
    /// One bullet per source line, input order preserved.
    /// Non-empty for every entry the parser emits.
    pub bullets: Vec<String>,
}

/// A single education entry: first line university, second line degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub university: String,
    pub degree: String,
}

/// Everything the composer needs to produce one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeContent {
    pub name: String,
    pub summary: String,
    pub certifications: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}
