// Typed records produced by the structured parsers and the matcher.
// All records are immutable value types owned by the request that built them.

pub mod jd;
pub mod matching;
pub mod resume;

pub use jd::JobDescriptionRecord;
pub use matching::MatchRecord;
pub use resume::{EducationEntry, ExperienceEntry, ResumeRecord, SkillGroup};
