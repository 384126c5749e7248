//! Structured parsing — plain text in, validated typed record out.
//!
//! The pipeline is three explicit stages so each failure mode stays
//! independently testable:
//!   1. invoke the model with a rendered prompt (temperature pinned to zero),
//!   2. parse the raw response as JSON,
//!   3. validate the JSON against the target record's required fields.
//!
//! No retry happens here: a model or validation failure propagates to the
//! caller as-is, and a record is never partially populated.

pub mod handlers;
pub mod jd_parser;
pub mod prompts;
pub mod resume_parser;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, ModelClient};

/// A record the structured parser can produce. The associated prompt embeds
/// the exact JSON shape; `check` carries record-level invariants that plain
/// deserialization cannot express.
pub trait TargetRecord: DeserializeOwned {
    const NAME: &'static str;

    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Runs the full pipeline against a rendered prompt.
pub async fn parse_structured<T: TargetRecord>(
    llm: &dyn ModelClient,
    system: &str,
    prompt: &str,
) -> Result<T, AppError> {
    let raw = llm.invoke(prompt, system).await?;
    let value = parse_json(&raw)?;
    validate(value, &raw)
}

/// Stage 2: raw model output → JSON value. Code fences are tolerated;
/// anything else non-JSON fails with the raw output attached.
fn parse_json(raw: &str) -> Result<Value, AppError> {
    serde_json::from_str(strip_json_fences(raw)).map_err(|e| AppError::SchemaValidation {
        message: format!("model output is not valid JSON: {e}"),
        raw: raw.to_string(),
    })
}

/// Stage 3: JSON value → validated record. All-or-nothing — a missing or
/// mistyped field rejects the whole response.
fn validate<T: TargetRecord>(value: Value, raw: &str) -> Result<T, AppError> {
    let record: T = serde_json::from_value(value).map_err(|e| AppError::SchemaValidation {
        message: format!("model output does not match the {} schema: {e}", T::NAME),
        raw: raw.to_string(),
    })?;

    record.check().map_err(|message| AppError::SchemaValidation {
        message: format!("{} rejected: {message}", T::NAME),
        raw: raw.to_string(),
    })?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubModel;
    use crate::models::MatchRecord;

    #[test]
    fn test_parse_json_accepts_fenced_output() {
        let value = parse_json("```json\n{\"score\": 7, \"explanation\": \"ok\"}\n```").unwrap();
        assert_eq!(value["score"], 7);
    }

    #[test]
    fn test_parse_json_failure_carries_raw_output() {
        let raw = "Sure! Here is the JSON you asked for:";
        let err = parse_json(raw).unwrap_err();
        match err {
            AppError::SchemaValidation { raw: carried, .. } => assert_eq!(carried, raw),
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_mistyped_field() {
        let raw = r#"{"score": "seven", "explanation": "ok"}"#;
        let value: Value = serde_json::from_str(raw).unwrap();
        let err = validate::<MatchRecord>(value, raw).unwrap_err();
        assert!(matches!(err, AppError::SchemaValidation { .. }));
    }

    #[test]
    fn test_validate_runs_record_check() {
        let raw = r#"{"score": 7.0, "explanation": ""}"#;
        let value: Value = serde_json::from_str(raw).unwrap();
        let err = validate::<MatchRecord>(value, raw).unwrap_err();
        match err {
            AppError::SchemaValidation { message, .. } => {
                assert!(message.contains("explanation"));
            }
            other => panic!("expected SchemaValidation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_parse_structured_end_to_end_with_stub() {
        let stub = StubModel::returning(r#"{"score": 8.0, "explanation": "Close fit."}"#);
        let record: MatchRecord = parse_structured(&stub, "sys", "prompt").await.unwrap();
        assert!((record.score - 8.0).abs() < f64::EPSILON);
        assert_eq!(stub.calls(), 1);
    }
}
