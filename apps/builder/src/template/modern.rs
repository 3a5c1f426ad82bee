//! Modern: two columns. A 30% accent sidebar carries identity, contact, links
//! and skill chips; the main column carries the narrative sections.

use crate::models::{is_present, ResumeDocument};
use crate::template::blocks::{contact_items, filled_skill_categories, profile_links, project_links};
use crate::template::flags::{education_visible, experience_visible, project_visible};
use crate::template::render_tree::{
    Align, Emphasis, Font, PageLayout, RenderNode, SectionKind, TextStyle, TitleStyle,
};
use crate::template::{Layout, LayoutContext};

pub struct Modern;

pub const SIDEBAR_WIDTH_PERCENT: u8 = 30;
const ROLE_FALLBACK: &str = "Professional";

/// The first experience entry's role, or a generic title.
fn headline_role(doc: &ResumeDocument) -> &str {
    doc.experience
        .first()
        .map(|exp| exp.role.trim())
        .filter(|role| is_present(role))
        .unwrap_or(ROLE_FALLBACK)
}

fn sidebar_section(kind: SectionKind, title: &str, children: Vec<RenderNode>) -> RenderNode {
    RenderNode::Section {
        section: kind,
        title: Some(title.to_string()),
        title_style: TitleStyle::SidebarLabel,
        children,
    }
}

fn main_section(kind: SectionKind, title: &str, children: Vec<RenderNode>) -> RenderNode {
    RenderNode::Section {
        section: kind,
        title: Some(title.to_string()),
        title_style: TitleStyle::Underlined,
        children,
    }
}

impl Modern {
    fn sidebar(&self, ctx: &LayoutContext<'_>) -> RenderNode {
        let doc = ctx.doc;
        let flags = &ctx.flags;
        let plain = TextStyle::new(Font::Sans, Emphasis::Regular);

        let mut children = vec![RenderNode::Header {
            align: Align::Start,
            children: vec![
                RenderNode::heading(
                    1,
                    doc.display_name(),
                    TextStyle::new(Font::Sans, Emphasis::Strong),
                ),
                RenderNode::text(headline_role(doc), TextStyle::new(Font::Sans, Emphasis::Muted)),
            ],
        }];

        if flags.has_contact {
            children.push(sidebar_section(
                SectionKind::Contact,
                "Contact",
                contact_items(doc)
                    .into_iter()
                    .map(|item| RenderNode::text(item, plain.clone()))
                    .collect(),
            ));
        }
        if flags.has_links {
            children.push(sidebar_section(SectionKind::Links, "Links", profile_links(doc)));
        }
        if flags.has_skills {
            let chips = filled_skill_categories(doc)
                .map(|(category, tags)| RenderNode::Chips {
                    label: Some(category.key().to_string()),
                    items: tags.as_slice().to_vec(),
                })
                .collect();
            children.push(sidebar_section(SectionKind::Skills, "Expertise", chips));
        }

        RenderNode::Sidebar {
            width_percent: SIDEBAR_WIDTH_PERCENT,
            background: ctx.accent.to_string(),
            children,
        }
    }

    fn main(&self, ctx: &LayoutContext<'_>) -> RenderNode {
        let doc = ctx.doc;
        let flags = &ctx.flags;
        let body = TextStyle::new(Font::Sans, Emphasis::Regular);
        let muted = TextStyle::new(Font::Sans, Emphasis::Muted);
        let strong = TextStyle::new(Font::Sans, Emphasis::Strong);

        let mut children = Vec::new();

        if flags.has_summary {
            children.push(main_section(
                SectionKind::Summary,
                "Profile",
                vec![RenderNode::text(doc.summary.as_str(), body.clone())],
            ));
        }

        if flags.has_experience {
            let entries = doc
                .experience
                .iter()
                .filter(|e| experience_visible(e))
                .map(|exp| RenderNode::Entry {
                    children: vec![
                        RenderNode::heading(3, exp.role.as_str(), strong.clone()),
                        RenderNode::Row {
                            children: vec![
                                RenderNode::text(
                                    exp.company.as_str(),
                                    strong.clone().colored(ctx.accent),
                                ),
                                RenderNode::text(exp.date.as_str(), muted.clone()),
                            ],
                        },
                        RenderNode::text(exp.description.as_str(), body.clone()),
                    ],
                })
                .collect();
            children.push(main_section(SectionKind::Experience, "Experience", entries));
        }

        if flags.has_projects {
            let entries = doc
                .projects
                .iter()
                .filter(|p| project_visible(p))
                .map(|project| {
                    let mut title_row =
                        vec![RenderNode::heading(3, project.name.as_str(), strong.clone())];
                    title_row.extend(project_links(project));
                    let mut entry = vec![
                        RenderNode::Row {
                            children: title_row,
                        },
                        RenderNode::text(project.description.as_str(), body.clone()),
                    ];
                    if !project.tech_stack.is_empty() {
                        entry.push(RenderNode::Chips {
                            label: None,
                            items: project.tech_stack.as_slice().to_vec(),
                        });
                    }
                    RenderNode::Entry { children: entry }
                })
                .collect();
            children.push(main_section(SectionKind::Projects, "Projects", entries));
        }

        if flags.has_education {
            let entries = doc
                .education
                .iter()
                .filter(|e| education_visible(e))
                .map(|edu| RenderNode::Entry {
                    children: vec![
                        RenderNode::heading(3, edu.school.as_str(), strong.clone()),
                        RenderNode::Row {
                            children: vec![
                                RenderNode::text(edu.degree.as_str(), body.clone()),
                                RenderNode::text(edu.date.as_str(), muted.clone()),
                            ],
                        },
                    ],
                })
                .collect();
            children.push(main_section(SectionKind::Education, "Education", entries));
        }

        RenderNode::Main { children }
    }
}

impl Layout for Modern {
    fn project(&self, ctx: &LayoutContext<'_>) -> RenderNode {
        RenderNode::Page {
            layout: PageLayout::TwoColumn,
            font: Font::Sans,
            children: vec![self.sidebar(ctx), self.main(ctx)],
        }
    }
}
