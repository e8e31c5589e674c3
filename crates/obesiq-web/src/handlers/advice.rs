//! General health-advice pages, independent of any prediction.

use axum::extract::Path;
use axum::response::Html;
use axum::Json;
use obesiq_common::{ApiError, ObesiqError};
use obesiq_core::{
    advise, base_nutrition, base_physical_activity, AdviceBundle, UserProfile, WeightCategory,
    LIFESTYLE_BASE,
};

use crate::handlers::dashboard::{page, NAV_HTML};

fn render_items(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect()
}

fn category_section(category: WeightCategory) -> String {
    format!(
        r#"<div class="card">
        <div class="card-header">{}</div>
        <h3>Nutrition</h3><ul>{}</ul>
        <h3>Physical activity</h3><ul>{}</ul>
    </div>"#,
        category.label(),
        render_items(base_nutrition(category)),
        render_items(base_physical_activity(category)),
    )
}

/// GET /advice — base recommendations for every weight category,
/// rendered straight from the rule tables so the page cannot drift
/// from what assessments append to.
pub async fn advice_page() -> Html<String> {
    let sections: String = [
        WeightCategory::Underweight,
        WeightCategory::NormalWeight,
        WeightCategory::Overweight,
        WeightCategory::Obese,
    ]
    .iter()
    .map(|category| category_section(*category))
    .collect();

    let body = format!(
        r#"
    <div class="page-header">
        <h1 class="page-title">General Health Advice</h1>
        <p class="text-muted">Baseline recommendations per weight category (WHO-aligned)</p>
    </div>
    {sections}
    <div class="card">
        <div class="card-header">Lifestyle (all categories)</div>
        <ul>{}</ul>
    </div>"#,
        render_items(&LIFESTYLE_BASE),
    );
    Html(page("General Advice", NAV_HTML, &body))
}

/// GET /api/advice/{class_index} — advice bundle for a class index over
/// the neutral default profile.
pub async fn api_advice(
    Path(class_index): Path<usize>,
) -> Result<Json<AdviceBundle>, ApiError> {
    if class_index > 6 {
        return Err(ObesiqError::Validation(format!(
            "class index must be in 0..=6 (got {class_index})"
        ))
        .into());
    }
    Ok(Json(advise(class_index, &UserProfile::default())))
}
