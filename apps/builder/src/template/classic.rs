//! Classic: single column, serif, centered header, ruled section titles.

use crate::template::blocks::{contact_items, filled_skill_categories, profile_links, project_links};
use crate::template::flags::{education_visible, experience_visible, project_visible};
use crate::template::render_tree::{
    Align, Emphasis, Font, PageLayout, RenderNode, SectionKind, TextStyle, TitleStyle,
};
use crate::template::{Layout, LayoutContext};

pub struct Classic;

fn section(kind: SectionKind, title: &str, children: Vec<RenderNode>) -> RenderNode {
    RenderNode::Section {
        section: kind,
        title: Some(title.to_string()),
        title_style: TitleStyle::Ruled,
        children,
    }
}

impl Layout for Classic {
    fn project(&self, ctx: &LayoutContext<'_>) -> RenderNode {
        let doc = ctx.doc;
        let flags = &ctx.flags;
        let body = TextStyle::new(Font::Sans, Emphasis::Regular);
        let muted = TextStyle::new(Font::Sans, Emphasis::Muted);

        let mut header = vec![RenderNode::heading(
            1,
            doc.display_name(),
            TextStyle::new(Font::Serif, Emphasis::Strong).colored(ctx.accent),
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
            align: Align::Center,
            children: header,
        }];

        if flags.has_summary {
            children.push(section(
                SectionKind::Summary,
                "Summary",
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
                        RenderNode::Row {
                            children: vec![
                                RenderNode::heading(
                                    3,
                                    exp.company.as_str(),
                                    TextStyle::new(Font::Serif, Emphasis::Strong),
                                ),
                                RenderNode::text(exp.date.as_str(), muted.clone()),
                            ],
                        },
                        RenderNode::text(
                            exp.role.as_str(),
                            TextStyle::new(Font::Serif, Emphasis::Italic).colored(ctx.accent),
                        ),
                        RenderNode::text(exp.description.as_str(), body.clone()),
                    ],
                })
                .collect();
            children.push(section(SectionKind::Experience, "Experience", entries));
        }

        if flags.has_projects {
            let entries = doc
                .projects
                .iter()
                .filter(|p| project_visible(p))
                .map(|project| {
                    let mut title_row = vec![RenderNode::heading(
                        3,
                        project.name.as_str(),
                        TextStyle::new(Font::Serif, Emphasis::Strong),
                    )];
                    if !project.tech_stack.is_empty() {
                        title_row.push(RenderNode::InlineList {
                            label: None,
                            items: project.tech_stack.as_slice().to_vec(),
                            separator: ",".to_string(),
                        });
                    }
                    title_row.extend(project_links(project));
                    RenderNode::Entry {
                        children: vec![
                            RenderNode::Row {
                                children: title_row,
                            },
                            RenderNode::text(project.description.as_str(), body.clone()),
                        ],
                    }
                })
                .collect();
            children.push(section(SectionKind::Projects, "Projects", entries));
        }

        if flags.has_education {
            let entries = doc
                .education
                .iter()
                .filter(|e| education_visible(e))
                .map(|edu| RenderNode::Entry {
                    children: vec![
                        RenderNode::Row {
                            children: vec![
                                RenderNode::heading(
                                    3,
                                    edu.school.as_str(),
                                    TextStyle::new(Font::Serif, Emphasis::Strong),
                                ),
                                RenderNode::text(edu.date.as_str(), muted.clone()),
                            ],
                        },
                        RenderNode::text(edu.degree.as_str(), body.clone()),
                    ],
                })
                .collect();
            children.push(section(SectionKind::Education, "Education", entries));
        }

        if flags.has_skills {
            let lines = filled_skill_categories(doc)
                .map(|(category, tags)| RenderNode::LabeledLine {
                    label: category.key().to_string(),
                    value: tags.join(", "),
                })
                .collect();
            children.push(section(SectionKind::Skills, "Skills", lines));
        }

        RenderNode::Page {
            layout: PageLayout::SingleColumn,
            font: Font::Serif,
            children,
        }
    }
}
