//! Editor surface: everything the form needs after each change, in one view.

pub mod handlers;

use axum::{
    routing::{get, post, put},
    Router,
};
use serde::Serialize;

use crate::models::{AccentColor, ResumeDocument, TemplateId};
use crate::repository::StorageWarning;
use crate::scoring::{score, ScoreReport};
use crate::state::AppState;
use crate::template::{project, RenderTree};

/// The editor's live state: the document, its score and the live preview.
#[derive(Debug, Serialize)]
pub struct EditorView {
    pub document: ResumeDocument,
    pub template: TemplateId,
    pub accent_color: AccentColor,
    pub score: ScoreReport,
    pub render: RenderTree,
    /// Writes that failed while producing this view. The document above is
    /// still the edited one.
    pub warnings: Vec<StorageWarning>,
}

impl EditorView {
    pub fn build(
        document: ResumeDocument,
        template: TemplateId,
        accent_color: AccentColor,
        warnings: Vec<StorageWarning>,
    ) -> Self {
        let score = score(&document);
        let render = project(&document, template, &accent_color);
        Self {
            document,
            template,
            accent_color,
            score,
            render,
            warnings,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/document", get(handlers::handle_get_document))
        .route("/edit", post(handlers::handle_edit))
        .route("/template", put(handlers::handle_set_template))
        .route("/accent", put(handlers::handle_set_accent))
        .route("/palette", get(handlers::handle_palette))
        .route("/sample", post(handlers::handle_load_sample))
        .route("/suggest-skills", post(handlers::handle_suggest_skills))
        .route("/reset", post(handlers::handle_reset))
}
