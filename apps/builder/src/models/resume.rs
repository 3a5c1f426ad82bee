//! Canonical résumé document shape.
//!
//! Serialized field names are camelCase so the persisted JSON under
//! `resumeBuilderData` keeps the layout existing stores already hold.
//! Every list-valued section is always present (possibly empty), and every
//! tag list is free of duplicates and blank entries.

use serde::{Deserialize, Serialize};

/// Returns true when a free-text field carries something other than whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Shown wherever a name is expected but none has been entered.
pub const NAME_PLACEHOLDER: &str = "Your Name";

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Skills,
    pub links: Links,
}

impl ResumeDocument {
    /// A fresh editor document: one blank education, experience and project
    /// item so the form has somewhere to type.
    pub fn blank() -> Self {
        Self {
            education: vec![EducationEntry::default()],
            experience: vec![ExperienceEntry::default()],
            projects: vec![ProjectEntry::default()],
            ..Self::default()
        }
    }

    /// The trimmed name, or [`NAME_PLACEHOLDER`] when blank.
    pub fn display_name(&self) -> &str {
        match self.personal_info.name.trim() {
            "" => NAME_PLACEHOLDER,
            name => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub tech_stack: TagList,
    pub live_url: String,
    pub github_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Tags
// ────────────────────────────────────────────────────────────────────────────

/// Ordered, duplicate-free list of trimmed, non-blank strings.
///
/// Uniqueness is case-sensitive: `"rust"` and `"Rust"` are distinct tags.
/// Deserializing from a plain JSON array goes through the same rules as
/// [`TagList::add`], so a list read back from storage can never violate them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tag` (trimmed). Returns false when it was blank or already present.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Removes every exact match. Returns true when something was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = TagList::new();
        for tag in iter {
            list.add(tag.as_ref());
        }
        list
    }
}

impl From<Vec<String>> for TagList {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagList> for Vec<String> {
    fn from(list: TagList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Tools,
}

impl SkillCategory {
    /// Fixed display order.
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Tools,
    ];

    /// The persisted object key, also used as the on-page category label.
    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Tools => "tools",
        }
    }

    /// Heading used in plain-text export.
    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft",
            SkillCategory::Tools => "Tools",
        }
    }
}

/// Skills always live in the three-category form; the legacy comma string is
/// only accepted by `document::normalize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: TagList,
    pub soft: TagList,
    pub tools: TagList,
}

impl Skills {
    pub fn category(&self, category: SkillCategory) -> &TagList {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Tools => &self.tools,
        }
    }

    pub fn category_mut(&mut self, category: SkillCategory) -> &mut TagList {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    /// Categories in display order, paired with their lists.
    pub fn categories(&self) -> impl Iterator<Item = (SkillCategory, &TagList)> {
        SkillCategory::ALL.into_iter().map(|c| (c, self.category(c)))
    }

    /// Combined count across all three categories.
    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len() + self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_placeholder() {
        let mut doc = ResumeDocument::blank();
        assert_eq!(doc.display_name(), NAME_PLACEHOLDER);
        doc.personal_info.name = "  Ada Park ".to_string();
        assert_eq!(doc.display_name(), "Ada Park");
    }

    #[test]
    fn test_tag_add_trims_and_rejects_duplicates() {
        let mut tags = TagList::new();
        assert!(tags.add("  Rust "));
        assert!(!tags.add("Rust"));
        assert!(tags.add("rust"));
        assert_eq!(tags.as_slice(), ["Rust", "rust"]);
    }

    #[test]
    fn test_tag_add_rejects_blank() {
        let mut tags = TagList::new();
        assert!(!tags.add(""));
        assert!(!tags.add("   "));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_tag_remove_keeps_order() {
        let mut tags: TagList = ["a", "b", "c"].into_iter().collect();
        assert!(tags.remove("b"));
        assert!(!tags.remove("z"));
        assert_eq!(tags.as_slice(), ["a", "c"]);
    }

    #[test]
    fn test_tag_list_deserialize_sanitizes() {
        let tags: TagList = serde_json::from_str(r#"["Go", " Go ", "", "Zig"]"#).unwrap();
        assert_eq!(tags.as_slice(), ["Go", "Zig"]);
    }

    #[test]
    fn test_blank_document_seeds_one_item_per_section() {
        let doc = ResumeDocument::blank();
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.projects.len(), 1);
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_document_serializes_camel_case_keys() {
        let value = serde_json::to_value(ResumeDocument::blank()).unwrap();
        assert!(value.get("personalInfo").is_some());
        let project = &value["projects"][0];
        assert!(project.get("techStack").is_some());
        assert!(project.get("liveUrl").is_some());
        assert!(project.get("githubUrl").is_some());
        assert_eq!(value["skills"]["technical"], serde_json::json!([]));
    }

    #[test]
    fn test_skills_total_counts_every_category() {
        let skills = Skills {
            technical: ["Rust", "Go"].into_iter().collect(),
            soft: ["Mentoring"].into_iter().collect(),
            tools: ["Git", "Docker", "Nix"].into_iter().collect(),
        };
        assert_eq!(skills.total(), 6);
        let keys: Vec<_> = skills.categories().map(|(c, _)| c.key()).collect();
        assert_eq!(keys, ["technical", "soft", "tools"]);
    }
}
