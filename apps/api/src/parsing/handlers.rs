//! Axum route handlers for the parse endpoints.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::Json;

use crate::errors::AppError;
use crate::extract::RawDocument;
use crate::models::{JobDescriptionRecord, ResumeRecord};
use crate::parsing::jd_parser::job_description_from_upload;
use crate::parsing::resume_parser::resume_from_upload;
use crate::state::AppState;

pub(crate) fn multipart_err(e: MultipartError) -> AppError {
    AppError::Validation(format!("malformed multipart body: {e}"))
}

/// Reads the `file` part of a multipart body into a `RawDocument`.
pub(crate) async fn read_file_upload(multipart: &mut Multipart) -> Result<RawDocument, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_err)? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .ok_or_else(|| AppError::Validation("uploaded file has no filename".to_string()))?
            .to_string();
        let bytes = field.bytes().await.map_err(multipart_err)?;

        return Ok(RawDocument::new(file_name, bytes));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}

/// POST /api/v1/resume/parse
///
/// Accepts a `.pdf` resume upload and returns the structured `ResumeRecord`.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRecord>, AppError> {
    let doc = read_file_upload(&mut multipart).await?;
    let record = resume_from_upload(&state.extractors, &doc, state.llm.as_ref()).await?;
    Ok(Json(record))
}

/// POST /api/v1/job-description/parse
///
/// Accepts a `.txt` job description upload and returns the structured
/// `JobDescriptionRecord`.
pub async fn handle_parse_job_description(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<JobDescriptionRecord>, AppError> {
    let doc = read_file_upload(&mut multipart).await?;
    let record = job_description_from_upload(&state.extractors, &doc, state.llm.as_ref()).await?;
    Ok(Json(record))
}
