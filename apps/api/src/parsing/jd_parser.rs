//! JD Parser — extracted job description text → validated `JobDescriptionRecord`.

use crate::errors::AppError;
use crate::extract::{DocumentKind, ExtractorRegistry, RawDocument};
use crate::llm_client::ModelClient;
use crate::models::JobDescriptionRecord;
use crate::parsing::parse_structured;
use crate::parsing::prompts::{JD_PARSE_PROMPT_TEMPLATE, JD_PARSE_SYSTEM};

/// Parses job description text into a `JobDescriptionRecord` via the model.
pub async fn parse_job_description(
    jd_text: &str,
    llm: &dyn ModelClient,
) -> Result<JobDescriptionRecord, AppError> {
    let prompt = JD_PARSE_PROMPT_TEMPLATE.replace("{jd_text}", jd_text);
    parse_structured::<JobDescriptionRecord>(llm, JD_PARSE_SYSTEM, &prompt).await
}

/// Full upload pipeline: type check → UTF-8 decode → structured parse.
pub async fn job_description_from_upload(
    extractors: &ExtractorRegistry,
    doc: &RawDocument,
    llm: &dyn ModelClient,
) -> Result<JobDescriptionRecord, AppError> {
    let extractor = match extractors.for_file(doc.file_name()) {
        Some(e) if e.kind() == DocumentKind::Text => e,
        _ => {
            return Err(AppError::UnsupportedFormat(
                "Unsupported job description file type".to_string(),
            ))
        }
    };

    let text = extractor.extract_text(doc).await?;
    parse_job_description(&text, llm).await
}
