//! Built-in sample résumé and the canned "suggest skills" payload.

use crate::models::{
    EducationEntry, ExperienceEntry, Links, PersonalInfo, ProjectEntry, ResumeDocument,
    SkillCategory, Skills,
};

/// Fixed skill suggestions per category. This is a static list, not a recommender.
pub const SUGGESTED_SKILLS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Technical,
        &["TypeScript", "React", "Node.js", "PostgreSQL", "GraphQL"],
    ),
    (SkillCategory::Soft, &["Team Leadership", "Problem Solving"]),
    (SkillCategory::Tools, &["Git", "Docker", "AWS"]),
];

/// Merges `SUGGESTED_SKILLS` into the document's skills, keeping existing order
/// and skipping anything already present.
pub fn merge_suggested_skills(doc: &ResumeDocument) -> ResumeDocument {
    let mut next = doc.clone();
    for (category, suggestions) in SUGGESTED_SKILLS {
        let list = next.skills.category_mut(*category);
        for skill in *suggestions {
            list.add(skill);
        }
    }
    next
}

pub fn sample_document() -> ResumeDocument {
    ResumeDocument {
        personal_info: PersonalInfo {
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
        },
        summary: "Strategic product designer with 8+ years of experience building scalable \
                  design systems and high-converting user interfaces for fintech leaders. \
                  Led cross-functional teams of 12+ engineers, improved delivery efficiency \
                  by 25%, and mentored junior designers through two major platform \
                  redesigns while keeping accessibility and performance budgets front and center."
            .to_string(),
        education: vec![EducationEntry {
            school: "Stanford University".to_string(),
            degree: "B.S. in Computer Science".to_string(),
            date: "2012 — 2016".to_string(),
        }],
        experience: vec![ExperienceEntry {
            company: "Stripe".to_string(),
            role: "Senior Product Designer".to_string(),
            date: "2019 — Present".to_string(),
            description: "Led the redesign of the merchant dashboard, increasing conversion \
                          by 14% and reducing churn by 5k users monthly."
                .to_string(),
        }],
        projects: vec![
            ProjectEntry {
                name: "OpenVault".to_string(),
                description: "Built an open-source encryption layer for React. \
                              High-performance security for modern web apps."
                    .to_string(),
                tech_stack: ["React", "TypeScript", "WebCrypto API"].into_iter().collect(),
                live_url: "vault.janedoe.me".to_string(),
                github_url: "github.com/janedoe/vault".to_string(),
            },
            ProjectEntry {
                name: "Palette Lab".to_string(),
                description: "Accessible color-token generator used by 3 internal design teams."
                    .to_string(),
                tech_stack: ["Svelte", "Rust"].into_iter().collect(),
                live_url: String::new(),
                github_url: "github.com/janedoe/palette-lab".to_string(),
            },
        ],
        skills: Skills {
            technical: ["TypeScript", "React", "Node.js", "PostgreSQL", "GraphQL"]
                .into_iter()
                .collect(),
            soft: ["Team Leadership", "Problem Solving"].into_iter().collect(),
            tools: ["Git", "Docker", "AWS"].into_iter().collect(),
        },
        links: Links {
            github: "github.com/janedoe".to_string(),
            linkedin: "linkedin.com/in/janedoe".to_string(),
        },
    }
}
