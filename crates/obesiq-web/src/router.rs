//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    advice::{advice_page, api_advice},
    assess::{api_assess, assess_page, assess_submit},
    dashboard::dashboard,
    system::{api_health, api_labels, system_page},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(dashboard))
        .route("/assess", get(assess_page).post(assess_submit))
        .route("/advice", get(advice_page))
        .route("/system", get(system_page))

        // API endpoints
        .route("/api/assess", post(api_assess))
        .route("/api/advice/{class_index}", get(api_advice))
        .route("/api/labels", get(api_labels))
        .route("/api/health", get(api_health))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
