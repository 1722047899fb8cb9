//! The generation pipeline: turn submitted fields into `ResumeContent`, hand
//! it to the composer, return the artifact bytes.
//!
//! Flow: form fields -> section parsers -> ResumeContent -> Composer -> bytes.
//! One submission, one document; nothing is persisted.

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeContent;
use crate::parser::{
    decode_education, decode_experience, parse_education, parse_experience, parse_flat_list,
};
use crate::state::AppState;

/// Free-text form fields, one per resume section.
///
/// Certifications and skills accept pipe- or newline-delimited lists;
/// experience and education accept blank-line-separated blocks.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeForm {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub certifications: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
}

/// Structured-record variant: experience and education arrive as JSON text
/// blobs instead of free text. The flat-list fields stay free text.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsForm {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub certifications: String,
    #[serde(default)]
    pub skills: String,
    /// JSON array of experience records, as text.
    #[serde(default = "empty_json_array")]
    pub experience: String,
    /// JSON array of education records, as text.
    #[serde(default = "empty_json_array")]
    pub education: String,
}

fn empty_json_array() -> String {
    "[]".to_string()
}

/// Runs the free-text parsers over every section of the form.
/// Infallible by design: malformed blocks are dropped, not reported.
pub fn content_from_form(form: &ResumeForm) -> ResumeContent {
    ResumeContent {
        name: form.name.trim().to_string(),
        summary: form.summary.trim().to_string(),
        certifications: parse_flat_list(&form.certifications),
        skills: parse_flat_list(&form.skills),
        experience: parse_experience(&form.experience),
        education: parse_education(&form.education),
    }
}

/// Builds content from the structured-record form. A malformed record blob is
/// a user-visible error and nothing downstream runs.
pub fn content_from_records(form: &RecordsForm) -> Result<ResumeContent, AppError> {
    let experience = decode_experience(&form.experience)?;
    let education = decode_education(&form.education)?;

    Ok(ResumeContent {
        name: form.name.trim().to_string(),
        summary: form.summary.trim().to_string(),
        certifications: parse_flat_list(&form.certifications),
        skills: parse_flat_list(&form.skills),
        experience,
        education,
    })
}

/// Composes the artifact for already-parsed content.
///
/// Returns the generation id (for logs and the response header) alongside the
/// document bytes.
pub fn generate_document(
    state: &AppState,
    content: &ResumeContent,
) -> Result<(Uuid, Vec<u8>), AppError> {
    let generation_id = Uuid::new_v4();

    let bytes = state
        .composer
        .compose(content, &state.theme, state.logo.as_deref())?;

    info!(
        %generation_id,
        bytes = bytes.len(),
        experience = content.experience.len(),
        education = content.education.len(),
        skills = content.skills.len(),
        "composed resume document"
    );

    Ok((generation_id, bytes))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::compose::{theme, DocxComposer};
    use crate::extract::FixtureExtractor;

    fn test_state() -> AppState {
        AppState {
            theme: theme::classic(),
            logo: None,
            composer: Arc::new(DocxComposer),
            extractor: Arc::new(FixtureExtractor),
        }
    }

    fn sample_form() -> ResumeForm {
        ResumeForm {
            name: "  Jordan Avery  ".to_string(),
            summary: "Engineer.".to_string(),
            certifications: "AWS SAA | CKA".to_string(),
            skills: "Rust\nSQL".to_string(),
            experience: "Initech Springfield, IL 2020\nDeveloper\nShipped things".to_string(),
            education: "State University\nBS Computer Science".to_string(),
        }
    }

    #[test]
    fn test_content_from_form_routes_each_field_to_its_parser() {
        let content = content_from_form(&sample_form());
        assert_eq!(content.name, "Jordan Avery", "name must be trimmed");
        assert_eq!(content.certifications, vec!["AWS SAA", "CKA"]);
        assert_eq!(content.skills, vec!["Rust", "SQL"]);
        assert_eq!(content.experience.len(), 1);
        assert_eq!(content.education.len(), 1);
    }

    #[test]
    fn test_content_from_form_with_all_blank_sections() {
        let form = ResumeForm {
            name: "Jordan Avery".to_string(),
            summary: String::new(),
            certifications: String::new(),
            skills: String::new(),
            experience: String::new(),
            education: String::new(),
        };
        let content = content_from_form(&form);
        assert!(content.certifications.is_empty());
        assert!(content.experience.is_empty());
    }

    #[test]
    fn test_content_from_records_decodes_valid_blobs() {
        let form = RecordsForm {
            name: "Jordan Avery".to_string(),
            summary: String::new(),
            certifications: String::new(),
            skills: String::new(),
            experience: r#"[{"company":"Initech","city":"Springfield","state":"IL","years":"2020","title":"Developer","bullets":["Shipped things"]}]"#.to_string(),
            education: r#"[{"university":"State University","degree":"BS"}]"#.to_string(),
        };
        let content = content_from_records(&form).unwrap();
        assert_eq!(content.experience[0].company, "Initech");
        assert_eq!(content.education[0].degree, "BS");
    }

    #[test]
    fn test_content_from_records_rejects_malformed_blob() {
        let form = RecordsForm {
            name: "Jordan Avery".to_string(),
            summary: String::new(),
            certifications: String::new(),
            skills: String::new(),
            experience: "not json at all".to_string(),
            education: "[]".to_string(),
        };
        let err = content_from_records(&form).unwrap_err();
        assert!(
            matches!(err, AppError::UnprocessableEntity(_)),
            "malformed records must surface as 422, got {err:?}"
        );
    }

    #[test]
    fn test_generate_document_returns_zip_bytes_and_id() {
        let state = test_state();
        let content = content_from_form(&sample_form());
        let (generation_id, bytes) = generate_document(&state, &content).unwrap();
        assert!(!generation_id.is_nil());
        assert_eq!(&bytes[..2], b"PK", "artifact must be a zip container");
    }
}
