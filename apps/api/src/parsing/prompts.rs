// All LLM prompt constants for the structured parsers.
// Each template embeds the exact JSON schema the model must emit — field
// names, types, and required-ness — so validation downstream is mechanical.

/// System prompt for resume parsing — enforces JSON-only output.
pub const RESUME_PARSE_SYSTEM: &str =
    "You are an expert resume parser. \
    Extract structured information from raw resume text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Resume parsing prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Extract the following information from the resume text provided.

Return a JSON object with this EXACT schema. Every field is REQUIRED — if the
resume does not state a value, use an empty string or empty list, never omit
the field:
{
  "name": "Full name of the candidate (string)",
  "email": "Email address of the candidate (string)",
  "phone": "Phone number of the candidate (string)",
  "skills": [
    {
      "hard_skills": ["list of technical skills (strings)"],
      "soft_skills": ["list of interpersonal skills (strings)"]
    }
  ],
  "experience": [
    {
      "company": "Name of the company (string)",
      "role": "Role or position held (string)",
      "start_date": "Start date exactly as written (string)",
      "end_date": "End date exactly as written (string)",
      "description": "Responsibilities and achievements (string)"
    }
  ],
  "education": [
    {
      "institution": "Name of the educational institution (string)",
      "degree": "Degree or qualification obtained (string)",
      "start_date": "Start date exactly as written (string)",
      "end_date": "End date exactly as written (string)",
      "field_of_study": "Field of study or major (string)"
    }
  ]
}

Keep skills, experience, and education entries in the order they appear in
the resume. Copy dates verbatim — do not normalize them.

RESUME TEXT:
{resume_text}"#;

/// System prompt for job description parsing — enforces JSON-only output.
pub const JD_PARSE_SYSTEM: &str =
    "You are an expert job description parser. \
    Extract structured information from raw job description text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// JD parsing prompt template. Replace `{jd_text}` before sending.
pub const JD_PARSE_PROMPT_TEMPLATE: &str = r#"Extract the following information from the job description text provided.

Return a JSON object with this EXACT schema. Every field is REQUIRED — if the
job description does not state a value, use an empty string or empty list,
never omit the field:
{
  "title": "Job title (string)",
  "company": "Hiring company name (string)",
  "experience_level": "Experience level, e.g. 'senior' or '5+ years' (string)",
  "description": "Summary of the role (string)",
  "required_skills": [
    {
      "hard_skills": ["must-have technical skills (strings)"],
      "soft_skills": ["must-have interpersonal skills (strings)"]
    }
  ],
  "nice_to_have_skills": [
    {
      "hard_skills": ["preferred technical skills (strings)"],
      "soft_skills": ["preferred interpersonal skills (strings)"]
    }
  ],
  "responsibilities": ["list of responsibility statements (strings)"]
}

REQUIRED skills are explicit must-haves — phrases like "required", "must
have", "you will need". NICE-TO-HAVE skills are phrases like "preferred",
"bonus", "nice to have", "a plus". Keep lists in document order.

JOB DESCRIPTION TEXT:
{jd_text}"#;
