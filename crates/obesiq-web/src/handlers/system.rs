//! System status page plus the small JSON endpoints.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use obesiq_core::ObesityClass;
use serde::Serialize;

use crate::handlers::dashboard::{page, NAV_HTML};
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub classifier_loaded: bool,
}

/// GET /api/health
pub async fn api_health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        classifier_loaded: state.classifier_loaded().await,
    })
}

#[derive(Debug, Serialize)]
pub struct ClassLabel {
    pub index: usize,
    pub identifier: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// GET /api/labels — the fixed class-label bijection.
pub async fn api_labels() -> Json<Vec<ClassLabel>> {
    Json(
        ObesityClass::ALL
            .iter()
            .map(|class| ClassLabel {
                index: class.index(),
                identifier: class.identifier(),
                label: class.display(),
                color: class.risk_color(),
            })
            .collect(),
    )
}

/// GET /system — configuration and classifier status.
pub async fn system_page(State(state): State<SharedState>) -> Html<String> {
    let model = &state.config.model;
    let loaded = state.classifier_loaded().await;

    let body = format!(
        r#"
    <div class="page-header">
        <h1 class="page-title">System Status</h1>
    </div>
    <div class="card">
        <div class="card-header">Classifier</div>
        <table class="table">
            <tr><td>Status</td><td>{}</td></tr>
            <tr><td>Manifest</td><td><code>{}</code></td></tr>
            <tr><td>Weights</td><td><code>{}</code></td></tr>
            <tr><td>GPU</td><td>{}</td></tr>
            <tr><td>Mock fallback</td><td>{}</td></tr>
        </table>
    </div>
    <div class="card">
        <div class="card-header">Server</div>
        <table class="table">
            <tr><td>Bind</td><td><code>{}:{}</code></td></tr>
        </table>
    </div>"#,
        if loaded { "loaded" } else { "not loaded" },
        model.manifest_path,
        model.weights_path,
        model.use_gpu,
        model.mock_fallback,
        state.config.server.host,
        state.config.server.port,
    );

    Html(page("System", NAV_HTML, &body))
}
