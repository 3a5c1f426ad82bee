// Building blocks shared by the three layouts.

use crate::models::{is_present, ProjectEntry, ResumeDocument, SkillCategory, TagList};
use crate::template::render_tree::{LinkKind, RenderNode};

/// Email, phone and location, skipping blanks, in that order.
pub fn contact_items(doc: &ResumeDocument) -> Vec<&str> {
    let info = &doc.personal_info;
    [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter(|v| is_present(v))
        .map(|v| v.as_str())
        .collect()
}

pub fn profile_links(doc: &ResumeDocument) -> Vec<RenderNode> {
    let mut links = Vec::new();
    if is_present(&doc.links.github) {
        links.push(RenderNode::Link {
            link: LinkKind::Github,
            url: doc.links.github.clone(),
        });
    }
    if is_present(&doc.links.linkedin) {
        links.push(RenderNode::Link {
            link: LinkKind::Linkedin,
            url: doc.links.linkedin.clone(),
        });
    }
    links
}

pub fn project_links(project: &ProjectEntry) -> Vec<RenderNode> {
    let mut links = Vec::new();
    if is_present(&project.github_url) {
        links.push(RenderNode::Link {
            link: LinkKind::Github,
            url: project.github_url.clone(),
        });
    }
    if is_present(&project.live_url) {
        links.push(RenderNode::Link {
            link: LinkKind::Live,
            url: project.live_url.clone(),
        });
    }
    links
}

/// Skill categories that have at least one tag, in display order.
pub fn filled_skill_categories(
    doc: &ResumeDocument,
) -> impl Iterator<Item = (SkillCategory, &TagList)> {
    doc.skills.categories().filter(|(_, tags)| !tags.is_empty())
}
