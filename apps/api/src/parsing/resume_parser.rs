//! Resume Parser — extracted resume text → validated `ResumeRecord`.

use crate::errors::AppError;
use crate::extract::{DocumentKind, ExtractorRegistry, RawDocument};
use crate::llm_client::ModelClient;
use crate::models::ResumeRecord;
use crate::parsing::parse_structured;
use crate::parsing::prompts::{RESUME_PARSE_PROMPT_TEMPLATE, RESUME_PARSE_SYSTEM};

/// Parses resume text into a `ResumeRecord` via the model.
pub async fn parse_resume(
    resume_text: &str,
    llm: &dyn ModelClient,
) -> Result<ResumeRecord, AppError> {
    let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    parse_structured::<ResumeRecord>(llm, RESUME_PARSE_SYSTEM, &prompt).await
}

/// Full upload pipeline: type check → PDF text extraction → structured parse.
/// The type check runs before anything else, so an unsupported upload never
/// reaches the decoder or the model.
pub async fn resume_from_upload(
    extractors: &ExtractorRegistry,
    doc: &RawDocument,
    llm: &dyn ModelClient,
) -> Result<ResumeRecord, AppError> {
    let extractor = match extractors.for_file(doc.file_name()) {
        Some(e) if e.kind() == DocumentKind::Pdf => e,
        _ => {
            return Err(AppError::UnsupportedFormat(
                "Unsupported resume file type".to_string(),
            ))
        }
    };

    let text = extractor.extract_text(doc).await?;
    parse_resume(&text, llm).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubModel;
    use crate::models::{EducationEntry, ExperienceEntry, SkillGroup};
    use bytes::Bytes;

    const FULL_RESUME_JSON: &str = r#"{
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "+44 20 7946 0958",
        "skills": [
            {"hard_skills": ["Rust", "PostgreSQL"], "soft_skills": ["Mentoring"]}
        ],
        "experience": [
            {
                "company": "Analytical Engines Ltd",
                "role": "Staff Engineer",
                "start_date": "2019-03",
                "end_date": "Present",
                "description": "Led the core platform team."
            }
        ],
        "education": [
            {
                "institution": "University of London",
                "degree": "BSc",
                "start_date": "2011",
                "end_date": "2014",
                "field_of_study": "Mathematics"
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_parse_resume_matches_stub_field_for_field() {
        let stub = StubModel::returning(FULL_RESUME_JSON);
        let record = parse_resume("raw resume text", &stub).await.unwrap();

        let expected = ResumeRecord {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0958".to_string(),
            skills: vec![SkillGroup {
                hard_skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
                soft_skills: vec!["Mentoring".to_string()],
            }],
            experience: vec![ExperienceEntry {
                company: "Analytical Engines Ltd".to_string(),
                role: "Staff Engineer".to_string(),
                start_date: "2019-03".to_string(),
                end_date: "Present".to_string(),
                description: "Led the core platform team.".to_string(),
            }],
            education: vec![EducationEntry {
                institution: "University of London".to_string(),
                degree: "BSc".to_string(),
                start_date: "2011".to_string(),
                end_date: "2014".to_string(),
                field_of_study: "Mathematics".to_string(),
            }],
        };

        assert_eq!(record, expected);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_email_is_schema_validation_error() {
        let stub = StubModel::returning(
            r#"{"name": "Ada", "phone": "1", "skills": [], "experience": [], "education": []}"#,
        );
        let err = parse_resume("raw resume text", &stub).await.unwrap_err();
        assert!(matches!(err, AppError::SchemaValidation { .. }));
    }

    #[tokio::test]
    async fn test_unsupported_resume_upload_never_calls_model() {
        let registry = ExtractorRegistry::standard();
        let stub = StubModel::returning(FULL_RESUME_JSON);
        let doc = RawDocument::new("resume.docx", Bytes::from_static(b"payload"));

        let err = resume_from_upload(&registry, &doc, &stub).await.unwrap_err();
        assert_eq!(err.to_string(), "Unsupported resume file type");
        assert_eq!(stub.calls(), 0);
    }

    #[test]
    fn test_prompt_embeds_resume_text() {
        let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", "UNIQUE-MARKER");
        assert!(prompt.contains("UNIQUE-MARKER"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
