//! Minimal: large name, untitled summary, inverted section titles and a
//! label/content grid for every entry.

use crate::template::blocks::{contact_items, filled_skill_categories, profile_links, project_links};
use crate::template::flags::{education_visible, experience_visible, project_visible};
use crate::template::render_tree::{
    Align, Emphasis, Font, PageLayout, RenderNode, SectionKind, TextStyle, TitleStyle,
};
use crate::template::{Layout, LayoutContext};

pub struct Minimal;

pub const SKILL_SEPARATOR: &str = "•";
const PROJECT_LABEL: &str = "Project";

fn section(kind: SectionKind, title: &str, children: Vec<RenderNode>) -> RenderNode {
    RenderNode::Section {
        section: kind,
        title: Some(title.to_string()),
        title_style: TitleStyle::Inverted,
        children,
    }
}

impl Layout for Minimal {
    fn project(&self, ctx: &LayoutContext<'_>) -> RenderNode {
        let doc = ctx.doc;
        let flags = &ctx.flags;
        let body = TextStyle::new(Font::Sans, Emphasis::Regular);
        let muted = TextStyle::new(Font::Sans, Emphasis::Muted);
        let strong = TextStyle::new(Font::Sans, Emphasis::Strong);

        let mut header = vec![RenderNode::heading(
            1,
            doc.display_name(),
            strong.clone().colored(ctx.accent),
        )];
        if flags.has_contact {
            header.push(RenderNode::Row {
                children: contact_items(doc)
                    .into_iter()
                    .map(|item| RenderNode::text(item, muted.clone()))
                    .collect(),
            });
        }
        if flags.has_links {
            header.push(RenderNode::Row {
                children: profile_links(doc),
            });
        }

        let mut children = vec![RenderNode::Header {
            align: Align::Start,
            children: header,
        }];

        if flags.has_summary {
            children.push(RenderNode::Section {
                section: SectionKind::Summary,
                title: None,
                title_style: TitleStyle::Inverted,
                children: vec![RenderNode::text(
                    doc.summary.as_str(),
                    TextStyle::new(Font::Sans, Emphasis::Italic).colored(ctx.accent),
                )],
            });
        }

        if flags.has_experience {
            let rows = doc
                .experience
                .iter()
                .filter(|e| experience_visible(e))
                .map(|exp| RenderNode::GridRow {
                    label: vec![RenderNode::text(exp.date.as_str(), muted.clone())],
                    content: vec![
                        RenderNode::heading(3, exp.company.as_str(), strong.clone()),
                        RenderNode::text(exp.role.as_str(), muted.clone()),
                        RenderNode::text(exp.description.as_str(), body.clone()),
                    ],
                })
                .collect();
            children.push(section(SectionKind::Experience, "Experience", rows));
        }

        if flags.has_projects {
            let rows = doc
                .projects
                .iter()
                .filter(|p| project_visible(p))
                .map(|project| {
                    let mut label = vec![RenderNode::text(
                        PROJECT_LABEL,
                        strong.clone().colored(ctx.accent),
                    )];
                    label.extend(project_links(project));
                    let mut content = vec![
                        RenderNode::heading(3, project.name.as_str(), strong.clone()),
                        RenderNode::text(project.description.as_str(), body.clone()),
                    ];
                    if !project.tech_stack.is_empty() {
                        content.push(RenderNode::Chips {
                            label: None,
                            items: project.tech_stack.as_slice().to_vec(),
                        });
                    }
                    RenderNode::GridRow { label, content }
                })
                .collect();
            children.push(section(SectionKind::Projects, "Projects", rows));
        }

        if flags.has_education {
            let rows = doc
                .education
                .iter()
                .filter(|e| education_visible(e))
                .map(|edu| RenderNode::GridRow {
                    label: vec![RenderNode::text(edu.date.as_str(), muted.clone())],
                    content: vec![
                        RenderNode::heading(3, edu.school.as_str(), strong.clone()),
                        RenderNode::text(edu.degree.as_str(), body.clone()),
                    ],
                })
                .collect();
            children.push(section(SectionKind::Education, "Education", rows));
        }

        if flags.has_skills {
            let rows = filled_skill_categories(doc)
                .map(|(category, tags)| RenderNode::GridRow {
                    label: vec![RenderNode::text(category.key(), muted.clone())],
                    content: vec![RenderNode::InlineList {
                        label: None,
                        items: tags.as_slice().to_vec(),
                        separator: SKILL_SEPARATOR.to_string(),
                    }],
                })
                .collect();
            children.push(section(SectionKind::Skills, "Skills", rows));
        }

        RenderNode::Page {
            layout: PageLayout::SingleColumn,
            font: Font::Sans,
            children,
        }
    }
}
