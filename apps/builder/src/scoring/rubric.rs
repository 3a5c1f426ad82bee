//! The ATS readiness rubric.
//!
//! Eleven independent criteria, each worth a fixed number of points. Their
//! declaration order is also the order in which failed criteria become
//! suggestions.

use serde::{Deserialize, Serialize};

use crate::models::ResumeDocument;
use crate::scoring::signals::{has_action_verb, has_measurable_impact, word_count};

pub const SUMMARY_MIN_CHARS: usize = 50;
pub const SUMMARY_WORDS_MIN: usize = 40;
pub const SUMMARY_WORDS_MAX: usize = 120;
pub const MIN_PROJECTS: usize = 2;
/// Combined skills needed across all categories. The older standalone rubric
/// used 5; 8 is the threshold of record.
pub const MIN_SKILLS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    NamePresent,
    EmailPresent,
    SummaryLength,
    SummaryWordCount,
    ExperiencePresent,
    ProjectsPresent,
    EducationComplete,
    SkillsBreadth,
    LinksPresent,
    MeasurableImpact,
    ActionVerbs,
}

impl Criterion {
    /// Evaluation and ranking order.
    pub const ALL: [Criterion; 11] = [
        Criterion::NamePresent,
        Criterion::EmailPresent,
        Criterion::SummaryLength,
        Criterion::SummaryWordCount,
        Criterion::ExperiencePresent,
        Criterion::ProjectsPresent,
        Criterion::EducationComplete,
        Criterion::SkillsBreadth,
        Criterion::LinksPresent,
        Criterion::MeasurableImpact,
        Criterion::ActionVerbs,
    ];

    pub fn points(self) -> u32 {
        match self {
            Criterion::SummaryWordCount | Criterion::MeasurableImpact => 15,
            _ => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Criterion::NamePresent => "Name",
            Criterion::EmailPresent => "Email",
            Criterion::SummaryLength => "Summary length",
            Criterion::SummaryWordCount => "Summary word count",
            Criterion::ExperiencePresent => "Experience",
            Criterion::ProjectsPresent => "Projects",
            Criterion::EducationComplete => "Education",
            Criterion::SkillsBreadth => "Skills breadth",
            Criterion::LinksPresent => "Links",
            Criterion::MeasurableImpact => "Measurable impact",
            Criterion::ActionVerbs => "Action verbs",
        }
    }

    fn advice(self) -> &'static str {
        match self {
            Criterion::NamePresent => "Add your full name",
            Criterion::EmailPresent => "Add a professional email",
            Criterion::SummaryLength => "Write a professional summary longer than 50 characters",
            Criterion::SummaryWordCount => "Keep your summary between 40 and 120 words",
            Criterion::ExperiencePresent => "Add at least one work experience or internship",
            Criterion::ProjectsPresent => "Add at least 2 projects",
            Criterion::EducationComplete => "Complete an education entry with school and degree",
            Criterion::SkillsBreadth => "Add at least 8 skills across your categories",
            Criterion::LinksPresent => "Add your GitHub or LinkedIn profile",
            Criterion::MeasurableImpact => {
                "Add measurable impact (numbers, %, k or x) to a description"
            }
            Criterion::ActionVerbs => {
                "Use an action verb in your summary (e.g. Led, Built, Optimized)"
            }
        }
    }

    /// Improvement hint naming the criterion's point value.
    pub fn suggestion(self) -> String {
        format!("{} (+{})", self.advice(), self.points())
    }

    /// Fields count as filled when non-empty; whitespace is not stripped here.
    pub fn passes(self, doc: &ResumeDocument) -> bool {
        match self {
            Criterion::NamePresent => !doc.personal_info.name.is_empty(),
            Criterion::EmailPresent => !doc.personal_info.email.is_empty(),
            Criterion::SummaryLength => doc.summary.chars().count() > SUMMARY_MIN_CHARS,
            Criterion::SummaryWordCount => {
                (SUMMARY_WORDS_MIN..=SUMMARY_WORDS_MAX).contains(&word_count(&doc.summary))
            }
            Criterion::ExperiencePresent => doc
                .experience
                .iter()
                .any(|e| !e.company.is_empty() || !e.role.is_empty()),
            Criterion::ProjectsPresent => {
                doc.projects
                    .iter()
                    .filter(|p| !p.name.is_empty() || !p.description.is_empty())
                    .count()
                    >= MIN_PROJECTS
            }
            Criterion::EducationComplete => doc
                .education
                .iter()
                .any(|e| !e.school.is_empty() && !e.degree.is_empty()),
            Criterion::SkillsBreadth => doc.skills.total() >= MIN_SKILLS,
            Criterion::LinksPresent => {
                !doc.links.github.is_empty() || !doc.links.linkedin.is_empty()
            }
            Criterion::MeasurableImpact => doc
                .experience
                .iter()
                .map(|e| e.description.as_str())
                .chain(doc.projects.iter().map(|p| p.description.as_str()))
                .any(has_measurable_impact),
            Criterion::ActionVerbs => has_action_verb(&doc.summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, ExperienceEntry, ProjectEntry};

    #[test]
    fn test_rubric_order_and_weights() {
        let points: Vec<u32> = Criterion::ALL.iter().map(|c| c.points()).collect();
        assert_eq!(points, [10, 10, 10, 15, 10, 10, 10, 10, 10, 15, 10]);
    }

    #[test]
    fn test_suggestion_names_point_value() {
        assert_eq!(Criterion::NamePresent.suggestion(), "Add your full name (+10)");
        assert!(Criterion::MeasurableImpact.suggestion().ends_with("(+15)"));
    }

    #[test]
    fn test_summary_length_is_strictly_greater_than_fifty() {
        let mut doc = ResumeDocument::default();
        doc.summary = "a".repeat(50);
        assert!(!Criterion::SummaryLength.passes(&doc));
        doc.summary.push('a');
        assert!(Criterion::SummaryLength.passes(&doc));
    }

    #[test]
    fn test_summary_word_count_bounds_are_inclusive() {
        let mut doc = ResumeDocument::default();
        for (words, expected) in [(39, false), (40, true), (120, true), (121, false)] {
            doc.summary = vec!["word"; words].join(" ");
            assert_eq!(Criterion::SummaryWordCount.passes(&doc), expected, "{words} words");
        }
    }

    #[test]
    fn test_experience_needs_company_or_role() {
        let mut doc = ResumeDocument::default();
        doc.experience.push(ExperienceEntry {
            description: "Did things".to_string(),
            ..ExperienceEntry::default()
        });
        assert!(!Criterion::ExperiencePresent.passes(&doc));
        doc.experience[0].role = "Engineer".to_string();
        assert!(Criterion::ExperiencePresent.passes(&doc));
    }

    #[test]
    fn test_projects_need_two_meaningful_entries() {
        let mut doc = ResumeDocument::default();
        doc.projects = vec![
            ProjectEntry {
                name: "One".to_string(),
                ..ProjectEntry::default()
            },
            ProjectEntry::default(),
        ];
        assert!(!Criterion::ProjectsPresent.passes(&doc));
        doc.projects[1].description = "Second".to_string();
        assert!(Criterion::ProjectsPresent.passes(&doc));
    }

    #[test]
    fn test_education_needs_school_and_degree_on_same_entry() {
        let mut doc = ResumeDocument::default();
        doc.education = vec![
            EducationEntry {
                school: "MIT".to_string(),
                ..EducationEntry::default()
            },
            EducationEntry {
                degree: "BSc".to_string(),
                ..EducationEntry::default()
            },
        ];
        assert!(!Criterion::EducationComplete.passes(&doc));
    }

    #[test]
    fn test_skills_threshold_is_eight_not_legacy_five() {
        let mut doc = ResumeDocument::default();
        for skill in ["a", "b", "c", "d", "e"] {
            doc.skills.technical.add(skill);
        }
        assert!(!Criterion::SkillsBreadth.passes(&doc), "5 skills must not pass");
        for skill in ["f", "g"] {
            doc.skills.soft.add(skill);
        }
        doc.skills.tools.add("h");
        assert!(Criterion::SkillsBreadth.passes(&doc), "8 skills across categories pass");
    }

    #[test]
    fn test_measurable_impact_checks_projects_too() {
        let mut doc = ResumeDocument::default();
        doc.projects.push(ProjectEntry {
            description: "Cut costs 2x".to_string(),
            ..ProjectEntry::default()
        });
        assert!(Criterion::MeasurableImpact.passes(&doc));
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.name = " ".to_string();
        doc.links.github = "\t".to_string();
        assert!(Criterion::NamePresent.passes(&doc));
        assert!(Criterion::LinksPresent.passes(&doc));
    }

    #[test]
    fn test_summary_length_counts_trailing_spaces() {
        let mut doc = ResumeDocument::default();
        doc.summary = format!("{}   ", "a".repeat(48));
        assert!(Criterion::SummaryLength.passes(&doc));
    }
}
