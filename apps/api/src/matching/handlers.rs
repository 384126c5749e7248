//! Axum route handler for the match endpoint.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::errors::AppError;
use crate::extract::{DocumentKind, RawDocument};
use crate::matching::match_uploads;
use crate::models::MatchRecord;
use crate::parsing::handlers::multipart_err;
use crate::state::AppState;

/// POST /api/v1/match
///
/// Accepts two multipart parts — `resume` (.pdf) and `job_description`
/// (.txt) — and returns the scored `MatchRecord`.
///
/// Each part's extension is checked as soon as the part header arrives, so a
/// bad resume filename short-circuits before the job description part is
/// read from the stream at all.
pub async fn handle_match(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchRecord>, AppError> {
    let mut resume_doc: Option<RawDocument> = None;
    let mut jd_doc: Option<RawDocument> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_err)? {
        let (kind, message) = match field.name() {
            Some("resume") => (DocumentKind::Pdf, "Unsupported resume file type"),
            Some("job_description") => (DocumentKind::Text, "Unsupported job description file type"),
            _ => continue,
        };

        let file_name = field
            .file_name()
            .ok_or_else(|| AppError::Validation("uploaded file has no filename".to_string()))?
            .to_string();

        if !state.extractors.get(kind).is_type(&file_name) {
            return Err(AppError::UnsupportedFormat(message.to_string()));
        }

        let bytes = field.bytes().await.map_err(multipart_err)?;
        let doc = RawDocument::new(file_name, bytes);
        match kind {
            DocumentKind::Pdf => resume_doc = Some(doc),
            DocumentKind::Text => jd_doc = Some(doc),
        }
    }

    let resume_doc = resume_doc
        .ok_or_else(|| AppError::Validation("multipart field 'resume' is required".to_string()))?;
    let jd_doc = jd_doc.ok_or_else(|| {
        AppError::Validation("multipart field 'job_description' is required".to_string())
    })?;

    let record = match_uploads(
        &state.extractors,
        &resume_doc,
        &jd_doc,
        state.llm.as_ref(),
    )
    .await?;

    Ok(Json(record))
}
