//! Clipboard text: header, contact line, links, then the five sections in a
//! fixed order. Record fields are pipe-joined with blanks dropped.

use crate::models::{is_present, ResumeDocument};
use crate::template::flags::{education_visible, experience_visible, project_visible};

const FIELD_SEPARATOR: &str = " | ";

fn pipe_join<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

fn push_line(out: &mut Vec<String>, line: String) {
    if !line.is_empty() {
        out.push(line);
    }
}

/// Renders `doc` as plain text. There is no parser back from this form.
pub fn to_plain_text(doc: &ResumeDocument) -> String {
    let info = &doc.personal_info;
    let mut lines = vec![doc.display_name().to_string()];
    push_line(
        &mut lines,
        pipe_join([info.email.as_str(), info.phone.as_str(), info.location.as_str()]),
    );
    if is_present(&doc.links.github) {
        lines.push(format!("GitHub: {}", doc.links.github.trim()));
    }
    if is_present(&doc.links.linkedin) {
        lines.push(format!("LinkedIn: {}", doc.links.linkedin.trim()));
    }

    lines.push(String::new());
    lines.push("SUMMARY".to_string());
    push_line(&mut lines, doc.summary.trim().to_string());

    lines.push(String::new());
    lines.push("EXPERIENCE".to_string());
    for exp in doc.experience.iter().filter(|e| experience_visible(e)) {
        push_line(
            &mut lines,
            pipe_join([exp.company.as_str(), exp.role.as_str(), exp.date.as_str()]),
        );
        push_line(&mut lines, exp.description.trim().to_string());
    }

    lines.push(String::new());
    lines.push("PROJECTS".to_string());
    for project in doc.projects.iter().filter(|p| project_visible(p)) {
        push_line(
            &mut lines,
            pipe_join([
                project.name.as_str(),
                project.github_url.as_str(),
                project.live_url.as_str(),
            ]),
        );
        push_line(&mut lines, project.description.trim().to_string());
        if !project.tech_stack.is_empty() {
            lines.push(format!("Tech: {}", project.tech_stack.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push("EDUCATION".to_string());
    for edu in doc.education.iter().filter(|e| education_visible(e)) {
        push_line(
            &mut lines,
            pipe_join([edu.school.as_str(), edu.degree.as_str(), edu.date.as_str()]),
        );
    }

    lines.push(String::new());
    lines.push("SKILLS".to_string());
    for (category, tags) in doc.skills.categories() {
        if !tags.is_empty() {
            lines.push(format!("{}: {}", category.title(), tags.join(", ")));
        }
    }

    lines.join("\n").trim().to_string()
}
