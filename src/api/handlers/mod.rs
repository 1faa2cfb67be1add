use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::models::*;

/// Body for a filter text change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterInput {
    #[serde(default)]
    pub text: String,
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Manifest
// ============================================================

pub async fn get_manifest(State(state): State<AppState>) -> Json<ManifestLayout> {
    let view = state.view.lock().expect("manifest view lock poisoned");
    Json(view.layout().clone())
}

pub async fn populate_manifest(
    State(state): State<AppState>,
    Json(roster): Json<StationRoster>,
) -> Json<ManifestLayout> {
    let (name, entries) = roster.into_parts();
    let mut view = state.view.lock().expect("manifest view lock poisoned");
    let layout = view.populate(&state.sources.context(), &name, entries.as_ref());
    tracing::info!(
        "Manifest for {:?} populated with {} sections",
        name,
        layout.sections.len()
    );
    Json(layout.clone())
}

pub async fn set_source_entries(
    State(state): State<AppState>,
    Json(entries): Json<CrewManifestEntries>,
) -> StatusCode {
    let mut view = state.view.lock().expect("manifest view lock poisoned");
    tracing::debug!("Replacing source entries ({} entries)", entries.len());
    view.set_source_entries(entries);
    StatusCode::NO_CONTENT
}

pub async fn set_filter(
    State(state): State<AppState>,
    Json(input): Json<FilterInput>,
) -> Json<ManifestLayout> {
    let mut view = state.view.lock().expect("manifest view lock poisoned");
    Json(view.set_filter_text(&state.sources.context(), input.text).clone())
}

pub async fn submit_filter(State(state): State<AppState>) -> Json<ManifestLayout> {
    let mut view = state.view.lock().expect("manifest view lock poisoned");
    Json(view.submit_filter(&state.sources.context()).clone())
}
