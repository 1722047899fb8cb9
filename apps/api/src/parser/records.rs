//! Structured-record input mode: experience and education supplied as JSON
//! text blobs instead of free text.
//!
//! Unlike the free-text parsers, a malformed payload here is a user-visible
//! error: the client asserted structure, so a decode failure aborts
//! generation instead of silently dropping data.

use crate::errors::AppError;
use crate::models::resume::{EducationEntry, ExperienceEntry};

/// Decodes a JSON array of experience records.
pub fn decode_experience(raw: &str) -> Result<Vec<ExperienceEntry>, AppError> {
    serde_json::from_str(raw).map_err(|e| {
        AppError::UnprocessableEntity(format!("experience records are not valid JSON: {e}"))
    })
}

/// Decodes a JSON array of education records.
pub fn decode_education(raw: &str) -> Result<Vec<EducationEntry>, AppError> {
    serde_json::from_str(raw).map_err(|e| {
        AppError::UnprocessableEntity(format!("education records are not valid JSON: {e}"))
    })
}
