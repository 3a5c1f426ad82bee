pub mod resume;
pub mod template;

pub use resume::{
    is_present, EducationEntry, ExperienceEntry, Links, PersonalInfo, ProjectEntry,
    ResumeDocument, SkillCategory, Skills, TagList,
};
pub use template::{AccentColor, AccentColorError, TemplateId};
