use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::export::to_plain_text;
use crate::models::TemplateId;
use crate::preview::PreviewView;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PreviewQuery {
    /// Switches (and remembers) the template before rendering.
    pub template: Option<String>,
}

/// GET /api/v1/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewQuery>,
) -> Result<Json<PreviewView>, AppError> {
    let repo = &state.repository;
    let mut snapshot = repo.load_document()?;

    let template = match params.template.as_deref() {
        Some(raw) => {
            let template: TemplateId = raw.parse()?;
            snapshot.warnings.extend(repo.save_template(template));
            info!("Preview switched template to {template}");
            template
        }
        None => repo.load_template()?,
    };
    let accent = repo.load_accent()?;

    let view = PreviewView::build(&snapshot.value, template, accent, snapshot.warnings);
    if view.completeness.incomplete {
        debug!("Previewing an incomplete resume: missing {:?}", view.completeness.missing);
    }
    Ok(Json(view))
}

/// GET /api/v1/preview/text
pub async fn handle_plain_text(State(state): State<AppState>) -> Result<String, AppError> {
    let snapshot = state.repository.load_document()?;
    Ok(to_plain_text(&snapshot.value))
}
