//! Typed document edits.
//!
//! Each editor action is one `DocumentEdit` variant naming exactly the field it
//! writes, so an invalid target cannot be expressed. `apply_edit` never mutates
//! its input: it returns a fresh snapshot, and an index that does not exist is
//! reported instead of silently ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::sample::{merge_suggested_skills, sample_document};
use crate::document::tags::{add_tag, remove_tag};
use crate::models::{
    EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument, SkillCategory,
};

/// Project descriptions are capped at this many characters.
pub const PROJECT_DESCRIPTION_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkField {
    Github,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    School,
    Degree,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Company,
    Role,
    Date,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Name,
    Description,
    LiveUrl,
    GithubUrl,
}

/// List-valued sections whose items can be added and removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSection {
    Education,
    Experience,
    Projects,
}

impl ItemSection {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemSection::Education => "education",
            ItemSection::Experience => "experience",
            ItemSection::Projects => "projects",
        }
    }
}

impl std::fmt::Display for ItemSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DocumentEdit {
    SetPersonal {
        field: PersonalField,
        value: String,
    },
    SetSummary {
        value: String,
    },
    SetLink {
        field: LinkField,
        value: String,
    },
    SetEducation {
        index: usize,
        field: EducationField,
        value: String,
    },
    SetExperience {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    SetProject {
        index: usize,
        field: ProjectField,
        value: String,
    },
    AddTech {
        index: usize,
        tag: String,
    },
    RemoveTech {
        index: usize,
        tag: String,
    },
    AddSkill {
        category: SkillCategory,
        tag: String,
    },
    RemoveSkill {
        category: SkillCategory,
        tag: String,
    },
    /// Replaces a whole category; blanks and repeats in `tags` are dropped.
    SetSkills {
        category: SkillCategory,
        tags: Vec<String>,
    },
    AddItem {
        section: ItemSection,
    },
    RemoveItem {
        section: ItemSection,
        index: usize,
    },
    LoadSample,
    SuggestSkills,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{section} has no item at index {index} (length {len})")]
    IndexOutOfRange {
        section: ItemSection,
        index: usize,
        len: usize,
    },
}

/// Applies one edit and returns the new snapshot.
pub fn apply_edit(doc: &ResumeDocument, edit: &DocumentEdit) -> Result<ResumeDocument, EditError> {
    let mut next = doc.clone();
    match edit {
        DocumentEdit::SetPersonal { field, value } => {
            let info = &mut next.personal_info;
            let slot = match field {
                PersonalField::Name => &mut info.name,
                PersonalField::Email => &mut info.email,
                PersonalField::Phone => &mut info.phone,
                PersonalField::Location => &mut info.location,
            };
            *slot = value.clone();
        }
        DocumentEdit::SetSummary { value } => next.summary = value.clone(),
        DocumentEdit::SetLink { field, value } => match field {
            LinkField::Github => next.links.github = value.clone(),
            LinkField::Linkedin => next.links.linkedin = value.clone(),
        },
        DocumentEdit::SetEducation {
            index,
            field,
            value,
        } => {
            let entry = item_mut(&mut next.education, ItemSection::Education, *index)?;
            let slot = match field {
                EducationField::School => &mut entry.school,
                EducationField::Degree => &mut entry.degree,
                EducationField::Date => &mut entry.date,
            };
            *slot = value.clone();
        }
        DocumentEdit::SetExperience {
            index,
            field,
            value,
        } => {
            let entry = item_mut(&mut next.experience, ItemSection::Experience, *index)?;
            let slot = match field {
                ExperienceField::Company => &mut entry.company,
                ExperienceField::Role => &mut entry.role,
                ExperienceField::Date => &mut entry.date,
                ExperienceField::Description => &mut entry.description,
            };
            *slot = value.clone();
        }
        DocumentEdit::SetProject {
            index,
            field,
            value,
        } => {
            let entry = item_mut(&mut next.projects, ItemSection::Projects, *index)?;
            match field {
                ProjectField::Name => entry.name = value.clone(),
                ProjectField::Description => {
                    entry.description = value.chars().take(PROJECT_DESCRIPTION_LIMIT).collect()
                }
                ProjectField::LiveUrl => entry.live_url = value.clone(),
                ProjectField::GithubUrl => entry.github_url = value.clone(),
            }
        }
        DocumentEdit::AddTech { index, tag } => {
            let entry = item_mut(&mut next.projects, ItemSection::Projects, *index)?;
            entry.tech_stack = add_tag(&entry.tech_stack, tag);
        }
        DocumentEdit::RemoveTech { index, tag } => {
            let entry = item_mut(&mut next.projects, ItemSection::Projects, *index)?;
            entry.tech_stack = remove_tag(&entry.tech_stack, tag);
        }
        DocumentEdit::AddSkill { category, tag } => {
            let list = next.skills.category_mut(*category);
            *list = add_tag(list, tag);
        }
        DocumentEdit::RemoveSkill { category, tag } => {
            let list = next.skills.category_mut(*category);
            *list = remove_tag(list, tag);
        }
        DocumentEdit::SetSkills { category, tags } => {
            *next.skills.category_mut(*category) = tags.iter().collect();
        }
        DocumentEdit::AddItem { section } => match section {
            ItemSection::Education => next.education.push(EducationEntry::default()),
            ItemSection::Experience => next.experience.push(ExperienceEntry::default()),
            ItemSection::Projects => next.projects.push(ProjectEntry::default()),
        },
        DocumentEdit::RemoveItem { section, index } => {
            return remove_item(doc, *section, *index);
        }
        DocumentEdit::LoadSample => return Ok(sample_document()),
        DocumentEdit::SuggestSkills => return Ok(merge_suggested_skills(doc)),
        DocumentEdit::Reset => return Ok(ResumeDocument::blank()),
    }
    Ok(next)
}

/// Removes the item at `index`; the remaining items keep their relative order.
fn remove_item(
    doc: &ResumeDocument,
    section: ItemSection,
    index: usize,
) -> Result<ResumeDocument, EditError> {
    let mut next = doc.clone();
    match section {
        ItemSection::Education => remove_at(&mut next.education, section, index)?,
        ItemSection::Experience => remove_at(&mut next.experience, section, index)?,
        ItemSection::Projects => remove_at(&mut next.projects, section, index)?,
    }
    Ok(next)
}

fn item_mut<T>(items: &mut [T], section: ItemSection, index: usize) -> Result<&mut T, EditError> {
    let len = items.len();
    items.get_mut(index).ok_or(EditError::IndexOutOfRange {
        section,
        index,
        len,
    })
}

fn remove_at<T>(items: &mut Vec<T>, section: ItemSection, index: usize) -> Result<(), EditError> {
    if index >= items.len() {
        return Err(EditError::IndexOutOfRange {
            section,
            index,
            len: items.len(),
        });
    }
    items.remove(index);
    Ok(())
}
