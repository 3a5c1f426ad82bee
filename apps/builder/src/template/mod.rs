//! Template projection.
//!
//! One canonical document, three structurally different layouts. Each layout
//! is a unit type implementing [`Layout`]; [`project`] is the only place that
//! picks between them. Projection is pure: the document is only borrowed.

mod blocks;
pub mod classic;
pub mod flags;
pub mod minimal;
pub mod modern;
pub mod render_tree;

use crate::models::{AccentColor, ResumeDocument, TemplateId};
pub use flags::SectionFlags;
pub use render_tree::{RenderNode, RenderTree};

/// Inputs shared by every layout for a single projection.
pub struct LayoutContext<'a> {
    pub doc: &'a ResumeDocument,
    pub flags: SectionFlags,
    pub accent: &'a str,
}

pub trait Layout {
    /// Builds the page root for this layout.
    fn project(&self, ctx: &LayoutContext<'_>) -> RenderNode;
}

fn layout_for(template: TemplateId) -> &'static dyn Layout {
    match template {
        TemplateId::Classic => &classic::Classic,
        TemplateId::Modern => &modern::Modern,
        TemplateId::Minimal => &minimal::Minimal,
    }
}

/// Projects `doc` into the render tree for `template` in `accent` color.
pub fn project(doc: &ResumeDocument, template: TemplateId, accent: &AccentColor) -> RenderTree {
    let ctx = LayoutContext {
        doc,
        flags: SectionFlags::compute(doc),
        accent: accent.as_str(),
    };
    let root = layout_for(template).project(&ctx);
    RenderTree {
        template,
        accent_color: accent.to_string(),
        flags: ctx.flags,
        root,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::document::normalize;
    use crate::template::render_tree::SectionKind;
    use crate::test_support::{arb_document, full_sample_document};

    #[test]
    fn test_empty_document_projects_in_every_template() {
        let doc = normalize(&serde_json::json!({}));
        for template in TemplateId::ALL {
            let tree = project(&doc, template, &AccentColor::default());
            assert!(tree.sections().is_empty(), "{template}: {:?}", tree.sections());
            assert!(tree.texts().iter().any(|t| t == "Your Name"));
        }
    }

    #[test]
    fn test_projection_does_not_change_document() {
        let doc = full_sample_document();
        let before = doc.clone();
        for template in TemplateId::ALL {
            let _ = project(&doc, template, &AccentColor::default());
        }
        assert_eq!(doc, before);
    }

    #[test]
    fn test_tree_carries_template_and_accent() {
        let accent = AccentColor::parse("hsl(220, 60%, 35%)").unwrap();
        let tree = project(&full_sample_document(), TemplateId::Modern, &accent);
        assert_eq!(tree.template, TemplateId::Modern);
        assert_eq!(tree.accent_color, "hsl(220, 60%, 35%)");
    }

    #[test]
    fn test_layouts_differ_in_structure() {
        let doc = full_sample_document();
        let accent = AccentColor::default();
        let classic = project(&doc, TemplateId::Classic, &accent);
        let modern = project(&doc, TemplateId::Modern, &accent);
        let minimal = project(&doc, TemplateId::Minimal, &accent);
        assert_ne!(classic.sections(), modern.sections());
        assert_ne!(classic.root, minimal.root);
    }

    proptest! {
        #[test]
        fn prop_hidden_experience_never_rendered(doc in arb_document()) {
            let flags = SectionFlags::compute(&doc);
            for template in TemplateId::ALL {
                let tree = project(&doc, template, &AccentColor::default());
                let rendered = tree.sections().contains(&SectionKind::Experience);
                prop_assert_eq!(rendered, flags.has_experience);
            }
        }

        #[test]
        fn prop_every_flagged_off_section_is_absent(doc in arb_document()) {
            for template in TemplateId::ALL {
                let tree = project(&doc, template, &AccentColor::default());
                let sections = tree.sections();
                let flags = tree.flags;
                for (kind, visible) in [
                    (SectionKind::Education, flags.has_education),
                    (SectionKind::Projects, flags.has_projects),
                    (SectionKind::Skills, flags.has_skills),
                    (SectionKind::Summary, flags.has_summary),
                    (SectionKind::Links, flags.has_links),
                ] {
                    if !visible {
                        prop_assert!(!sections.contains(&kind), "{} rendered {:?}", template, kind);
                    }
                }
            }
        }
    }
}
