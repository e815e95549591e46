pub mod catalog;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        // Catalogue
        .route("/categories", get(catalog::list_categories))
        .route("/categories/{slug}/shows", get(catalog::category_shows))
        .route("/shows", get(catalog::get_show))
        .route("/shows/clips", get(catalog::show_clips))
        .route("/clips", get(catalog::get_clip));

    // Read-only JSON; any origin may call it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
