use serde::Serialize;

use crate::models::{
    is_present, EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument,
};

/// Which sections have anything worth drawing. Computed once per projection;
/// a false flag means the section is left out of the tree entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionFlags {
    pub has_personal_info: bool,
    pub has_contact: bool,
    pub has_links: bool,
    pub has_summary: bool,
    pub has_education: bool,
    pub has_experience: bool,
    pub has_skills: bool,
    pub has_projects: bool,
}

impl SectionFlags {
    pub fn compute(doc: &ResumeDocument) -> Self {
        let info = &doc.personal_info;
        let has_contact =
            is_present(&info.email) || is_present(&info.phone) || is_present(&info.location);
        Self {
            has_personal_info: is_present(&info.name) || has_contact,
            has_contact,
            has_links: is_present(&doc.links.github) || is_present(&doc.links.linkedin),
            has_summary: is_present(&doc.summary),
            has_education: doc.education.iter().any(education_visible),
            has_experience: doc.experience.iter().any(experience_visible),
            has_skills: !doc.skills.is_empty(),
            has_projects: doc.projects.iter().any(project_visible),
        }
    }
}

pub fn education_visible(entry: &EducationEntry) -> bool {
    is_present(&entry.school) || is_present(&entry.degree)
}

pub fn experience_visible(entry: &ExperienceEntry) -> bool {
    is_present(&entry.company) || is_present(&entry.role) || is_present(&entry.description)
}

pub fn project_visible(entry: &ProjectEntry) -> bool {
    is_present(&entry.name) || is_present(&entry.description)
}
