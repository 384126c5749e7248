//! Matcher — combines a `ResumeRecord` and a `JobDescriptionRecord` into a
//! scored match explanation via a single model call.
//!
//! Prompt construction is deterministic: the same pair of records always
//! renders the identical prompt text, so prompt snapshots can be tested
//! independently of the live model.

pub mod handlers;
pub mod prompts;

use anyhow::Context;

use crate::errors::AppError;
use crate::extract::{DocumentKind, ExtractorRegistry, RawDocument};
use crate::llm_client::ModelClient;
use crate::matching::prompts::{MATCH_PROMPT_TEMPLATE, MATCH_SYSTEM};
use crate::models::{JobDescriptionRecord, MatchRecord, ResumeRecord};
use crate::parsing::jd_parser::parse_job_description;
use crate::parsing::parse_structured;
use crate::parsing::resume_parser::parse_resume;

/// Renders the match prompt from both records' full structured content.
pub fn build_match_prompt(
    resume: &ResumeRecord,
    jd: &JobDescriptionRecord,
) -> Result<String, AppError> {
    let resume_details =
        serde_json::to_string_pretty(resume).context("failed to serialize resume record")?;
    let jd_details =
        serde_json::to_string_pretty(jd).context("failed to serialize job description record")?;

    Ok(MATCH_PROMPT_TEMPLATE
        .replace("{resume_details}", &resume_details)
        .replace("{jd_details}", &jd_details))
}

/// Scores a resume against a job description and explains the verdict.
/// The score is surfaced exactly as the model emitted it after the numeric
/// type check — no clamping or recomputation happens locally.
pub async fn explain_match(
    resume: &ResumeRecord,
    jd: &JobDescriptionRecord,
    llm: &dyn ModelClient,
) -> Result<MatchRecord, AppError> {
    let prompt = build_match_prompt(resume, jd)?;
    parse_structured::<MatchRecord>(llm, MATCH_SYSTEM, &prompt).await
}

/// Full two-upload pipeline: type checks (resume first), extraction, both
/// structured parses, then the match call. Either type check short-circuits
/// before any payload is decoded or any model call is made.
pub async fn match_uploads(
    extractors: &ExtractorRegistry,
    resume_doc: &RawDocument,
    jd_doc: &RawDocument,
    llm: &dyn ModelClient,
) -> Result<MatchRecord, AppError> {
    let pdf = extractors.get(DocumentKind::Pdf);
    if !pdf.is_type(resume_doc.file_name()) {
        return Err(AppError::UnsupportedFormat(
            "Unsupported resume file type".to_string(),
        ));
    }

    let txt = extractors.get(DocumentKind::Text);
    if !txt.is_type(jd_doc.file_name()) {
        return Err(AppError::UnsupportedFormat(
            "Unsupported job description file type".to_string(),
        ));
    }

    let resume_text = pdf.extract_text(resume_doc).await?;
    let jd_text = txt.extract_text(jd_doc).await?;

    let resume = parse_resume(&resume_text, llm).await?;
    let jd = parse_job_description(&jd_text, llm).await?;

    explain_match(&resume, &jd, llm).await
}
