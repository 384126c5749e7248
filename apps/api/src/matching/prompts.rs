// LLM prompt constants for the matcher.

/// System prompt for match explanation — enforces JSON-only output.
pub const MATCH_SYSTEM: &str =
    "You are an expert recruiter at explaining matches between resumes and \
    job descriptions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies outside the JSON.";

/// Match prompt template.
/// Replace `{resume_details}` and `{jd_details}` (both serialized records)
/// before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Given the resume details and job description details below, provide a match score from 0 to 10 and a detailed explanation for the score based on skills, experience, and education.

RESUME DETAILS:
{resume_details}

JOB DESCRIPTION DETAILS:
{jd_details}

Return a JSON object with this EXACT schema. Both fields are REQUIRED:
{
  "score": 7.5,
  "explanation": "Detailed reasoning referencing the candidate's skills, experience, and education against the role's requirements (non-empty string)"
}

The score must be a number on a 0-10 scale. The explanation must reference
concrete skills, experience, and education from the inputs."#;
