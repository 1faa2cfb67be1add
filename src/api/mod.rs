mod handlers;

use std::sync::{Arc, Mutex};

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::manifest::{CrewManifestView, ManifestSources};

pub use handlers::FilterInput;

/// Shared state: the collaborators and the single manifest view they feed.
#[derive(Clone)]
pub struct AppState {
    sources: Arc<ManifestSources>,
    view: Arc<Mutex<CrewManifestView>>,
}

impl AppState {
    pub fn new(sources: ManifestSources, view: CrewManifestView) -> Self {
        Self {
            sources: Arc::new(sources),
            view: Arc::new(Mutex::new(view)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/manifest", get(handlers::get_manifest))
        .route("/manifest", put(handlers::populate_manifest))
        .route("/manifest/entries", put(handlers::set_source_entries))
        .route("/manifest/filter", put(handlers::set_filter))
        .route("/manifest/filter/submit", post(handlers::submit_filter))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
