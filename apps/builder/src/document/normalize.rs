//! Migration of persisted documents into the current schema.
//!
//! Accepts anything JSON can hold. Older stores wrote `skills` as a single
//! comma-separated string and projects without `techStack`/`liveUrl`/`githubUrl`;
//! both upgrade silently. Fields of the wrong type degrade to their empty value
//! instead of failing the whole document.

use serde_json::Value;

use crate::models::{
    EducationEntry, ExperienceEntry, Links, PersonalInfo, ProjectEntry, ResumeDocument, Skills,
    TagList,
};

/// Upgrades a raw document to a `ResumeDocument`.
///
/// Idempotent: normalizing the serialized output again yields the same document.
pub fn normalize(raw: &Value) -> ResumeDocument {
    let personal = raw.get("personalInfo");
    let links = raw.get("links");

    ResumeDocument {
        personal_info: PersonalInfo {
            name: text_at(personal, "name"),
            email: text_at(personal, "email"),
            phone: text_at(personal, "phone"),
            location: text_at(personal, "location"),
        },
        summary: text(raw.get("summary")),
        education: items(raw.get("education"), |item| EducationEntry {
            school: text_at(Some(item), "school"),
            degree: text_at(Some(item), "degree"),
            date: text_at(Some(item), "date"),
        }),
        experience: items(raw.get("experience"), |item| ExperienceEntry {
            company: text_at(Some(item), "company"),
            role: text_at(Some(item), "role"),
            date: text_at(Some(item), "date"),
            description: text_at(Some(item), "description"),
        }),
        projects: items(raw.get("projects"), |item| ProjectEntry {
            name: text_at(Some(item), "name"),
            description: text_at(Some(item), "description"),
            tech_stack: tags(item.get("techStack")),
            live_url: text_at(Some(item), "liveUrl"),
            github_url: text_at(Some(item), "githubUrl"),
        }),
        skills: skills(raw.get("skills")),
        links: Links {
            github: text_at(links, "github"),
            linkedin: text_at(links, "linkedin"),
        },
    }
}

/// Converts the legacy comma-separated skills string.
///
/// Tokens are trimmed, blanks dropped and duplicates removed keeping the first
/// occurrence. Everything lands in `technical`.
pub fn migrate_legacy_skills(raw: &str) -> Skills {
    Skills {
        technical: raw.split(',').collect(),
        ..Skills::default()
    }
}

fn skills(raw: Option<&Value>) -> Skills {
    match raw {
        Some(Value::String(legacy)) => migrate_legacy_skills(legacy),
        Some(Value::Object(_)) => Skills {
            technical: tags(raw.and_then(|v| v.get("technical"))),
            soft: tags(raw.and_then(|v| v.get("soft"))),
            tools: tags(raw.and_then(|v| v.get("tools"))),
        },
        Some(Value::Array(_)) => Skills {
            technical: tags(raw),
            ..Skills::default()
        },
        _ => Skills::default(),
    }
}

fn items<T>(raw: Option<&Value>, build: impl Fn(&Value) -> T) -> Vec<T> {
    match raw {
        Some(Value::Array(values)) => values
            .iter()
            .filter(|v| v.is_object())
            .map(build)
            .collect(),
        _ => Vec::new(),
    }
}

fn tags(raw: Option<&Value>) -> TagList {
    match raw {
        Some(Value::Array(values)) => values.iter().filter_map(scalar).collect(),
        _ => TagList::new(),
    }
}

fn text_at(parent: Option<&Value>, key: &str) -> String {
    text(parent.and_then(|p| p.get(key)))
}

fn text(raw: Option<&Value>) -> String {
    raw.and_then(scalar).unwrap_or_default()
}

/// Strings pass through; numbers and booleans are stringified; everything else is absent.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::test_support::arb_raw_document;

    fn renormalize(doc: &ResumeDocument) -> ResumeDocument {
        normalize(&serde_json::to_value(doc).unwrap())
    }

    #[test]
    fn test_empty_object_yields_empty_lists() {
        let doc = normalize(&json!({}));
        assert!(doc.education.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.projects.is_empty());
        assert!(doc.skills.technical.is_empty());
        assert!(doc.skills.soft.is_empty());
        assert!(doc.skills.tools.is_empty());
        assert_eq!(doc, ResumeDocument::default());
    }

    #[test]
    fn test_legacy_skills_string_is_migrated() {
        let doc = normalize(&json!({ "skills": "React, Node, React, " }));
        assert_eq!(doc.skills.technical.as_slice(), ["React", "Node"]);
        assert!(doc.skills.soft.is_empty());
        assert!(doc.skills.tools.is_empty());
    }

    #[test]
    fn test_legacy_skills_never_serialize_as_string() {
        let doc = normalize(&json!({ "skills": "Go,Rust" }));
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value["skills"].is_object());
        assert_eq!(value["skills"]["technical"], json!(["Go", "Rust"]));
    }

    #[test]
    fn test_missing_project_fields_are_backfilled() {
        let doc = normalize(&json!({
            "projects": [{ "name": "OpenVault", "description": "Encryption", "link": "x" }]
        }));
        let project = &doc.projects[0];
        assert_eq!(project.name, "OpenVault");
        assert!(project.tech_stack.is_empty());
        assert_eq!(project.live_url, "");
        assert_eq!(project.github_url, "");
    }

    #[test]
    fn test_category_lists_are_deduplicated_and_trimmed() {
        let doc = normalize(&json!({
            "skills": { "technical": ["Rust", "Rust", " Go ", ""], "tools": ["Git", "   "] }
        }));
        assert_eq!(doc.skills.technical.as_slice(), ["Rust", "Go"]);
        assert_eq!(doc.skills.tools.as_slice(), ["Git"]);
        assert!(doc.skills.soft.is_empty());
    }

    #[test]
    fn test_wrong_types_degrade_to_empty() {
        let doc = normalize(&json!({
            "personalInfo": "Jane",
            "summary": null,
            "education": 5,
            "experience": [{ "company": 42, "role": ["x"] }, "junk"],
            "links": { "github": false }
        }));
        assert_eq!(doc.personal_info, PersonalInfo::default());
        assert_eq!(doc.summary, "");
        assert!(doc.education.is_empty());
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.experience[0].company, "42");
        assert_eq!(doc.experience[0].role, "");
        assert_eq!(doc.links.github, "false");
    }

    #[test]
    fn test_non_object_root_is_empty_document() {
        assert_eq!(normalize(&json!("hello")), ResumeDocument::default());
        assert_eq!(normalize(&json!([1, 2])), ResumeDocument::default());
        assert_eq!(normalize(&Value::Null), ResumeDocument::default());
    }

    #[test]
    fn test_canonical_document_is_unchanged() {
        let sample = crate::document::sample::sample_document();
        assert_eq!(renormalize(&sample), sample);
    }

    #[test]
    fn test_item_order_is_preserved() {
        let doc = normalize(&json!({
            "education": [{ "school": "B" }, { "school": "A" }, { "school": "C" }]
        }));
        let schools: Vec<_> = doc.education.iter().map(|e| e.school.as_str()).collect();
        assert_eq!(schools, ["B", "A", "C"]);
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in arb_raw_document()) {
            let once = normalize(&raw);
            prop_assert_eq!(renormalize(&once), once);
        }

        #[test]
        fn prop_tag_lists_hold_no_blank_or_duplicate(raw in arb_raw_document()) {
            let doc = normalize(&raw);
            let lists = doc
                .projects
                .iter()
                .map(|p| &p.tech_stack)
                .chain(doc.skills.categories().map(|(_, list)| list));
            for list in lists {
                let mut seen = std::collections::HashSet::new();
                for tag in list {
                    prop_assert!(!tag.trim().is_empty());
                    prop_assert!(seen.insert(tag.clone()));
                }
            }
        }
    }
}
