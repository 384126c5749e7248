use serde::{Deserialize, Serialize};

use crate::parsing::TargetRecord;

/// Match verdict: a numeric score on a 0–10 scale plus a free-text
/// explanation referencing skills, experience, and education.
///
/// The score is accepted as the model emits it — presence and numeric type
/// are enforced, the range is not. An out-of-range score passes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub score: f64,
    pub explanation: String,
}

impl TargetRecord for MatchRecord {
    const NAME: &'static str = "MatchRecord";

    fn check(&self) -> Result<(), String> {
        if self.explanation.trim().is_empty() {
            return Err("explanation must be non-empty".to_string());
        }
        Ok(())
    }
}
