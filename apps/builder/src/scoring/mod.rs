//! ATS readiness scoring.
//!
//! `score` is a pure function of the document: same input, same report, no
//! clock or randomness involved. It is linear in document size and cheap
//! enough to rerun on every edit.

pub mod rubric;
pub mod signals;

use serde::{Deserialize, Serialize};

use crate::models::ResumeDocument;
pub use rubric::Criterion;

pub const MAX_SCORE: u32 = 100;
pub const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    NeedsWork,
    GettingThere,
    Strong,
}

impl ScoreBand {
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=40 => ScoreBand::NeedsWork,
            41..=70 => ScoreBand::GettingThere,
            _ => ScoreBand::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::NeedsWork => "Needs Work",
            ScoreBand::GettingThere => "Getting There",
            ScoreBand::Strong => "Strong Resume",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub label: String,
    pub points: u32,
    pub earned: u32,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// 0 – 100.
    pub total: u32,
    /// First failed criteria in rubric order, at most `MAX_SUGGESTIONS`.
    pub suggestions: Vec<String>,
    pub band: ScoreBand,
    pub band_label: String,
    pub criteria: Vec<CriterionResult>,
}

/// Scores a document against the rubric.
pub fn score(doc: &ResumeDocument) -> ScoreReport {
    let criteria: Vec<CriterionResult> = Criterion::ALL
        .iter()
        .map(|&criterion| {
            let passed = criterion.passes(doc);
            let points = criterion.points();
            CriterionResult {
                criterion,
                label: criterion.label().to_string(),
                points,
                earned: if passed { points } else { 0 },
                passed,
            }
        })
        .collect();

    let earned: u32 = criteria.iter().map(|c| c.earned).sum();
    let total = earned.min(MAX_SCORE);

    let suggestions = criteria
        .iter()
        .filter(|c| !c.passed)
        .take(MAX_SUGGESTIONS)
        .map(|c| c.criterion.suggestion())
        .collect();

    let band = ScoreBand::from_total(total);
    ScoreReport {
        total,
        suggestions,
        band,
        band_label: band.label().to_string(),
        criteria,
    }
}
