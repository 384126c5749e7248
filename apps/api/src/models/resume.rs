use serde::{Deserialize, Serialize};

use crate::parsing::TargetRecord;

/// One group of related skills. Groups are kept in model-emitted order and
/// are never merged or deduplicated by this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
}

/// A single work experience entry. Dates are opaque strings — the model emits
/// them as written on the resume and no calendar validation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// A single education entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub field_of_study: String,
}

/// Full structured output of resume parsing. Every field is required;
/// a missing field fails schema validation rather than defaulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl TargetRecord for ResumeRecord {
    const NAME: &'static str = "ResumeRecord";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_record_deserializes_fully() {
        let json = r#"{
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

        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.skills[0].hard_skills, vec!["Rust", "PostgreSQL"]);
        assert_eq!(record.experience[0].end_date, "Present");
        assert_eq!(record.education[0].field_of_study, "Mathematics");
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        // No email — must be rejected, never defaulted.
        let json = r#"{
            "name": "Ada Lovelace",
            "phone": "+44 20 7946 0958",
            "skills": [],
            "experience": [],
            "education": []
        }"#;

        assert!(serde_json::from_str::<ResumeRecord>(json).is_err());
    }

    #[test]
    fn test_skill_group_order_is_preserved() {
        let json = r#"{
            "name": "A", "email": "a@b.c", "phone": "1",
            "skills": [
                {"hard_skills": ["Go"], "soft_skills": []},
                {"hard_skills": ["Rust"], "soft_skills": []}
            ],
            "experience": [], "education": []
        }"#;

        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.skills[0].hard_skills, vec!["Go"]);
        assert_eq!(record.skills[1].hard_skills, vec!["Rust"]);
    }
}
