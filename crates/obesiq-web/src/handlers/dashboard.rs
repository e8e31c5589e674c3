//! Dashboard handler — landing page with system overview.

use axum::extract::State;
use axum::response::Html;
use obesiq_core::ObesityClass;

use crate::state::SharedState;

/// Navigation HTML shared across all pages.
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// Common page shell.
pub fn page(title: &str, nav: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} — obesiq</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="app-container">
{nav}
<main class="main-content">
{body}
</main>
</div>
</body>
</html>"#
    )
}

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let model_status = if state.classifier_loaded().await {
        "Loaded"
    } else {
        "Not loaded (loads on first assessment)"
    };

    let class_rows: String = ObesityClass::ALL
        .iter()
        .map(|class| {
            format!(
                r#"<tr>
                <td>{}</td>
                <td><code>{}</code></td>
                <td>{}</td>
                <td><span class="badge" style="background:{}">{}</span></td>
            </tr>"#,
                class.index(),
                class.identifier(),
                class.display(),
                class.risk_color(),
                class.risk_level().label(),
            )
        })
        .collect();

    let body = format!(
        r#"
    <div class="page-header">
        <div>
            <h1 class="page-title">Obesity Risk Dashboard</h1>
            <p class="text-muted">Personalized risk evaluation with health recommendations</p>
        </div>
        <a href="/assess" class="btn btn-primary">New Assessment</a>
    </div>

    <div class="stats-grid">
        <div class="stat-card">
            <div class="stat-value">{model_status}</div>
            <div class="stat-label">Classifier artifact</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">7</div>
            <div class="stat-label">Severity classes</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">17</div>
            <div class="stat-label">Input features</div>
        </div>
    </div>

    <div class="card">
        <div class="card-header">Severity classes</div>
        <table class="table">
            <thead><tr><th>Index</th><th>Identifier</th><th>Label</th><th>Risk</th></tr></thead>
            <tbody>{class_rows}</tbody>
        </table>
    </div>

    <div class="card">
        <div class="card-header">Disclaimer</div>
        <p class="text-muted">This tool is for education and awareness only. It does not
        replace professional medical consultation, diagnosis, or treatment.</p>
    </div>"#
    );

    Html(page("Dashboard", NAV_HTML, &body))
}
