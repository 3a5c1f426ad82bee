//! Preview surface: read-mostly view of the rendered résumé plus the
//! clipboard text.

pub mod handlers;

use axum::{routing::get, Router};
use serde::Serialize;

use crate::document::{check_completeness, CompletenessCheck};
use crate::models::{AccentColor, ResumeDocument, TemplateId};
use crate::repository::StorageWarning;
use crate::scoring::{score, ScoreReport};
use crate::state::AppState;
use crate::template::{project, RenderTree};

#[derive(Debug, Serialize)]
pub struct PreviewView {
    pub template: TemplateId,
    pub accent_color: AccentColor,
    pub score: ScoreReport,
    pub render: RenderTree,
    pub completeness: CompletenessCheck,
    pub warnings: Vec<StorageWarning>,
}

impl PreviewView {
    pub fn build(
        document: &ResumeDocument,
        template: TemplateId,
        accent_color: AccentColor,
        warnings: Vec<StorageWarning>,
    ) -> Self {
        Self {
            template,
            score: score(document),
            render: project(document, template, &accent_color),
            completeness: check_completeness(document),
            accent_color,
            warnings,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::handle_preview))
        .route("/text", get(handlers::handle_plain_text))
}
