use serde::{Deserialize, Serialize};

use crate::models::{is_present, ResumeDocument};

/// Preview-side check for a résumé that would print visibly unfinished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessCheck {
    pub incomplete: bool,
    pub missing: Vec<String>,
    pub message: Option<String>,
}

const INCOMPLETE_MESSAGE: &str =
    "Your resume may look incomplete. Check your Name, Experience, or Projects.";

/// Incomplete when the name is blank, or when there is neither a named
/// employer nor a named project.
pub fn check_completeness(doc: &ResumeDocument) -> CompletenessCheck {
    let mut missing = Vec::new();

    if !is_present(&doc.personal_info.name) {
        missing.push("name".to_string());
    }

    let has_employer = doc.experience.iter().any(|e| is_present(&e.company));
    let has_named_project = doc.projects.iter().any(|p| is_present(&p.name));
    if !has_employer && !has_named_project {
        missing.push("experience_or_projects".to_string());
    }

    let incomplete = !missing.is_empty();
    CompletenessCheck {
        incomplete,
        missing,
        message: incomplete.then(|| INCOMPLETE_MESSAGE.to_string()),
    }
}
