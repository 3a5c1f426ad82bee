use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::{apply_edit, DocumentEdit};
use crate::editor::EditorView;
use crate::errors::AppError;
use crate::models::template::ACCENT_PRESETS;
use crate::models::{AccentColor, ResumeDocument, TemplateId};
use crate::repository::{Snapshot, StorageWarning};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TemplateRequest {
    pub template: String,
}

#[derive(Deserialize)]
pub struct AccentRequest {
    pub accent_color: String,
}

#[derive(Serialize)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: &'static str,
}

/// Reads the template and accent and assembles the view around `snapshot`.
fn view_for(
    state: &AppState,
    snapshot: Snapshot<ResumeDocument>,
    extra: Option<StorageWarning>,
) -> Result<EditorView, AppError> {
    let template = state.repository.load_template()?;
    let accent = state.repository.load_accent()?;
    let mut warnings = snapshot.warnings;
    warnings.extend(extra);
    Ok(EditorView::build(snapshot.value, template, accent, warnings))
}

fn edit_and_view(state: &AppState, edit: &DocumentEdit) -> Result<EditorView, AppError> {
    let snapshot = state
        .repository
        .update_document(|doc| apply_edit(doc, edit).map_err(AppError::from))?;
    view_for(state, snapshot, None)
}

/// GET /api/v1/editor/document
pub async fn handle_get_document(
    State(state): State<AppState>,
) -> Result<Json<EditorView>, AppError> {
    let snapshot = state.repository.load_document()?;
    Ok(Json(view_for(&state, snapshot, None)?))
}

/// POST /api/v1/editor/edit
pub async fn handle_edit(
    State(state): State<AppState>,
    Json(edit): Json<DocumentEdit>,
) -> Result<Json<EditorView>, AppError> {
    debug!("Applying edit {edit:?}");
    Ok(Json(edit_and_view(&state, &edit)?))
}

/// PUT /api/v1/editor/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateRequest>,
) -> Result<Json<EditorView>, AppError> {
    let template: TemplateId = req.template.parse()?;
    let warning = state.repository.save_template(template);
    info!("Template set to {template}");
    let snapshot = state.repository.load_document()?;
    Ok(Json(view_for(&state, snapshot, warning)?))
}

/// PUT /api/v1/editor/accent
pub async fn handle_set_accent(
    State(state): State<AppState>,
    Json(req): Json<AccentRequest>,
) -> Result<Json<EditorView>, AppError> {
    let accent = AccentColor::parse(&req.accent_color)?;
    let warning = state.repository.save_accent(&accent);
    info!(
        "Accent color set to {accent} ({})",
        accent.preset_name().unwrap_or("custom")
    );
    let snapshot = state.repository.load_document()?;
    Ok(Json(view_for(&state, snapshot, warning)?))
}

/// GET /api/v1/editor/palette
pub async fn handle_palette() -> Json<Vec<PaletteEntry>> {
    Json(
        ACCENT_PRESETS
            .iter()
            .map(|&(name, color)| PaletteEntry { name, color })
            .collect(),
    )
}

/// POST /api/v1/editor/sample
pub async fn handle_load_sample(
    State(state): State<AppState>,
) -> Result<Json<EditorView>, AppError> {
    info!("Loading sample document");
    Ok(Json(edit_and_view(&state, &DocumentEdit::LoadSample)?))
}

/// POST /api/v1/editor/suggest-skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
) -> Result<Json<EditorView>, AppError> {
    Ok(Json(edit_and_view(&state, &DocumentEdit::SuggestSkills)?))
}

/// POST /api/v1/editor/reset
pub async fn handle_reset(State(state): State<AppState>) -> Result<Json<EditorView>, AppError> {
    info!("Resetting document");
    Ok(Json(edit_and_view(&state, &DocumentEdit::Reset)?))
}
