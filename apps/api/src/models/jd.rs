use serde::{Deserialize, Serialize};

use crate::models::resume::SkillGroup;
use crate::parsing::TargetRecord;

/// Full structured output of job description parsing.
/// `experience_level` is a free-form string ("senior", "5+ years", ...);
/// required and nice-to-have skills stay in separate, ordered groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionRecord {
    pub title: String,
    pub company: String,
    pub experience_level: String,
    pub description: String,
    pub required_skills: Vec<SkillGroup>,
    pub nice_to_have_skills: Vec<SkillGroup>,
    pub responsibilities: Vec<String>,
}

impl TargetRecord for JobDescriptionRecord {
    const NAME: &'static str = "JobDescriptionRecord";
}
