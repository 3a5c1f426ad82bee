pub mod health;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;
use crate::{editor, preview};

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/v1/editor", editor::routes())
        .nest("/api/v1/preview", preview::routes())
        .fallback(not_found)
        .with_state(state)
}
