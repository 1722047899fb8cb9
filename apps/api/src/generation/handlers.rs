//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::pipeline::{
    content_from_form, content_from_records, generate_document, RecordsForm, ResumeForm,
};
use crate::models::resume::ResumeContent;
use crate::state::AppState;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOWNLOAD_DISPOSITION: &str = "attachment; filename=\"formatted_resume.docx\"";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub content: ResumeContent,
    pub parsed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    /// Backend label; "fixture" means placeholder content, not real extraction.
    pub extractor: &'static str,
    pub content: ResumeContent,
    pub extracted_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse
///
/// Parses the free-text fields and returns the structured records without
/// composing a document. Lets the client preview how its blocks were read
/// before generating.
pub async fn handle_parse(Json(form): Json<ResumeForm>) -> Result<Json<ParseResponse>, AppError> {
    Ok(Json(ParseResponse {
        content: content_from_form(&form),
        parsed_at: Utc::now(),
    }))
}

/// POST /api/v1/resumes/generate
///
/// Free-text path: parse every section, compose, return the document as a
/// download. Malformed blocks are dropped by the parsers, never reported.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(form): Json<ResumeForm>,
) -> Result<(HeaderMap, Bytes), AppError> {
    if form.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let content = content_from_form(&form);
    let (generation_id, bytes) = generate_document(&state, &content)?;

    Ok(docx_response(generation_id, bytes))
}

/// POST /api/v1/resumes/generate/records
///
/// Structured-record path: experience/education arrive as JSON text blobs.
/// A malformed blob surfaces as a 422 with a descriptive message and no
/// artifact is produced.
pub async fn handle_generate_records(
    State(state): State<AppState>,
    Json(form): Json<RecordsForm>,
) -> Result<(HeaderMap, Bytes), AppError> {
    if form.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let content = content_from_records(&form)?;
    let (generation_id, bytes) = generate_document(&state, &content)?;

    Ok(docx_response(generation_id, bytes))
}

/// POST /api/v1/resumes/extract
///
/// Accepts a multipart upload and routes the first file field through the
/// configured `SourceExtractor`. With the shipped fixture backend the
/// response is canned placeholder content, labeled as such.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read uploaded file: {e}")))?;

        let content = state.extractor.extract(&filename, &data).await?;
        return Ok(Json(ExtractResponse {
            extractor: state.extractor.name(),
            content,
            extracted_at: Utc::now(),
        }));
    }

    Err(AppError::Validation(
        "multipart payload contains no file field".to_string(),
    ))
}

/// Builds the download response: docx MIME type, attachment disposition with
/// the fixed filename, and the generation id echoed in a header.
fn docx_response(generation_id: Uuid, bytes: Vec<u8>) -> (HeaderMap, Bytes) {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(DOCX_MIME));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static(DOWNLOAD_DISPOSITION),
    );
    if let Ok(value) = HeaderValue::from_str(&generation_id.to_string()) {
        headers.insert("x-generation-id", value);
    }

    (headers, Bytes::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docx_response_sets_download_headers() {
        let id = Uuid::new_v4();
        let (headers, body) = docx_response(id, vec![b'P', b'K', 3, 4]);

        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            &HeaderValue::from_static(DOCX_MIME)
        );
        let disposition = headers.get(header::CONTENT_DISPOSITION).unwrap();
        assert!(disposition
            .to_str()
            .unwrap()
            .contains("formatted_resume.docx"));
        assert_eq!(
            headers.get("x-generation-id").unwrap().to_str().unwrap(),
            id.to_string()
        );
        assert_eq!(&body[..2], b"PK");
    }
}
