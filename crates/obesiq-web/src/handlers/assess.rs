//! Assessment pipeline and its form/API handlers.
//!
//! One request cycle: validate → normalize → predict → translate the
//! class index once → advice + risk profile. Everything below the
//! classifier call is pure.

use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use chrono::{DateTime, Utc};
use obesiq_common::{ApiError, ObesiqError, Result};
use obesiq_core::{
    advise, bmi, normalize, risk_profile, AdviceBundle, BmiCategory, ObesityClass, RiskProfile,
    UserProfile,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::handlers::dashboard::{page, NAV_HTML};
use crate::state::{AppState, SharedState};

/// Everything the display layer needs for one prediction cycle.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub class_index: usize,
    pub class_identifier: String,
    pub label: String,
    pub confidence: f32,
    pub probabilities: Vec<f32>,
    pub risk_color: String,
    pub risk_level: String,
    pub weight_category: String,
    pub bmi: f64,
    pub bmi_category: String,
    pub advice: AdviceBundle,
    pub risk_profile: RiskProfile,
}

/// Run the full pipeline for one profile.
pub async fn run_assessment(state: &AppState, profile: &UserProfile) -> Result<Assessment> {
    profile.validate()?;

    let record = normalize(profile);
    let classifier = state.classifier().await?;
    let prediction = classifier.predict(&record)?;

    // Single boundary for index → label translation.
    let class = ObesityClass::from_index(prediction.class_index).ok_or_else(|| {
        ObesiqError::Domain(format!(
            "class index {} outside the 7-class output",
            prediction.class_index
        ))
    })?;

    let bmi_value = bmi(profile.weight_kg, profile.height_m)?;
    let advice = advise(prediction.class_index, profile);
    let factors = risk_profile(profile)?;

    info!(
        class = class.identifier(),
        confidence = prediction.confidence(),
        bmi = format!("{bmi_value:.1}"),
        "assessment complete"
    );

    Ok(Assessment {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        class_index: prediction.class_index,
        class_identifier: class.identifier().to_string(),
        label: class.display().to_string(),
        confidence: prediction.confidence(),
        probabilities: prediction.probabilities,
        risk_color: class.risk_color().to_string(),
        risk_level: class.risk_level().label().to_string(),
        weight_category: class.weight_category().label().to_string(),
        bmi: bmi_value,
        bmi_category: BmiCategory::classify(bmi_value).label().to_string(),
        advice,
        risk_profile: factors,
    })
}

/// POST /api/assess — JSON in, JSON out.
pub async fn api_assess(
    State(state): State<SharedState>,
    Json(profile): Json<UserProfile>,
) -> std::result::Result<Json<Assessment>, ApiError> {
    Ok(Json(run_assessment(&state, &profile).await?))
}

/// GET /assess — the input form.
pub async fn assess_page() -> Html<String> {
    let defaults = UserProfile::default();
    let body = format!(
        r#"
    <div class="page-header">
        <h1 class="page-title">Risk Assessment</h1>
        <p class="text-muted">Answer the questions below and run the analysis</p>
    </div>
    <form method="post" action="/assess" class="card form-grid">
        <fieldset>
            <legend>About you</legend>
            <label>Sex {}</label>
            <label>Age <input type="number" name="age" min="10" max="100" value="{}"></label>
            <label>Height (m) <input type="number" name="height_m" min="1.0" max="2.5" step="0.01" value="{}"></label>
            <label>Weight (kg) <input type="number" name="weight_kg" min="30" max="300" step="0.1" value="{}"></label>
            <label>Family history of overweight {}</label>
            <label>Smoker {}</label>
            <label>Do you track your calories? {}</label>
        </fieldset>
        <fieldset>
            <legend>Eating habits</legend>
            <label>Vegetable servings per day <input type="range" name="vegetable_freq" min="0" max="5" value="{}"></label>
            <label>Main meals per day <input type="range" name="meals_per_day" min="1" max="5" value="{}"></label>
            <label>Water intake (L/day) <input type="range" name="water_intake" min="0" max="5" value="{}"></label>
            <label>Snacking frequency {}</label>
            <label>Alcohol frequency {}</label>
        </fieldset>
        <fieldset>
            <legend>Lifestyle</legend>
            <label>Physical activity (days/week) <input type="range" name="activity_freq" min="0" max="7" value="{}"></label>
            <label>Screen time (hours/day) <input type="range" name="screen_time" min="0" max="12" value="{}"></label>
            <label>Stress level <input type="range" name="stress" min="0" max="5" value="{}"></label>
            <label>Primary transport {}</label>
        </fieldset>
        <button type="submit" class="btn btn-primary">Analyze my profile</button>
    </form>"#,
        select("sex", &["Female", "Male"], defaults.sex.as_str()),
        defaults.age,
        defaults.height_m,
        defaults.weight_kg,
        select("family_history", &["No", "Yes"], &defaults.family_history),
        select("smoker", &["No", "Yes"], &defaults.smoker),
        select("calorie_tracking", &["No", "Yes"], &defaults.calorie_tracking),
        defaults.vegetable_freq,
        defaults.meals_per_day,
        defaults.water_intake,
        select(
            "snacking",
            &["Never", "Sometimes", "Frequently", "Always"],
            defaults.snacking.as_str(),
        ),
        select(
            "alcohol",
            &["Never", "Sometimes", "Frequently", "Always"],
            defaults.alcohol.as_str(),
        ),
        defaults.activity_freq,
        defaults.screen_time,
        defaults.stress,
        select(
            "transport",
            &["Walking", "Bicycle", "Public_Transit", "Car"],
            defaults.transport.as_str(),
        ),
    );
    Html(page("Risk Assessment", NAV_HTML, &body))
}

fn select(name: &str, options: &[&str], selected: &str) -> String {
    let items: String = options
        .iter()
        .map(|o| {
            let mark = if *o == selected { " selected" } else { "" };
            format!(r#"<option value="{o}"{mark}>{o}</option>"#)
        })
        .collect();
    format!(r#"<select name="{name}">{items}</select>"#)
}

/// POST /assess — form submit, renders the result view.
pub async fn assess_submit(
    State(state): State<SharedState>,
    Form(profile): Form<UserProfile>,
) -> std::result::Result<Html<String>, ApiError> {
    let assessment = run_assessment(&state, &profile).await?;
    Ok(Html(render_result(&assessment)))
}

fn render_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect()
}

fn render_result(a: &Assessment) -> String {
    let bars: String = a
        .probabilities
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let label = ObesityClass::from_index(i).map(|c| c.display()).unwrap_or("?");
            let pct = (p * 100.0) as u32;
            format!(
                r#"<tr><td>{label}</td><td>
                    <div class="progress-track"><div class="progress-bar" style="width:{pct}%"></div></div>
                </td><td>{:.1}%</td></tr>"#,
                p * 100.0
            )
        })
        .collect();

    let body = format!(
        r#"
    <div class="page-header">
        <h1 class="page-title">Assessment Result</h1>
        <p class="text-muted">{created} — assessment {id}</p>
    </div>
    <div class="stats-grid">
        <div class="stat-card" style="border-left: 5px solid {color};">
            <div class="stat-value">{label}</div>
            <div class="stat-label">Prediction (confidence {confidence:.1}%)</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">{bmi:.1} kg/m²</div>
            <div class="stat-label">BMI — {bmi_category}</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">{risk_level}</div>
            <div class="stat-label">Risk level (class {index})</div>
        </div>
    </div>
    <div class="grid-2">
        <div class="card">
            <div class="card-header">Class probabilities</div>
            <table class="table"><tbody>{bars}</tbody></table>
        </div>
        <div class="card">
            <div class="card-header">Factor review</div>
            <h3>Risk factors</h3><ul>{risks}</ul>
            <h3>Protective factors</h3><ul>{protections}</ul>
        </div>
    </div>
    <div class="grid-2">
        <div class="card"><div class="card-header">Nutrition</div><ul>{nutrition}</ul></div>
        <div class="card"><div class="card-header">Physical activity</div><ul>{activity}</ul></div>
    </div>
    <div class="card"><div class="card-header">Lifestyle</div><ul>{lifestyle}</ul></div>
    <a href="/assess" class="btn btn-outline">New assessment</a>"#,
        created = a.created_at.format("%Y-%m-%d %H:%M UTC"),
        id = a.id,
        color = a.risk_color,
        label = a.label,
        confidence = a.confidence * 100.0,
        bmi = a.bmi,
        bmi_category = a.bmi_category,
        risk_level = a.risk_level,
        index = a.class_index,
        bars = bars,
        risks = render_list(&a.risk_profile.risk_factors),
        protections = render_list(&a.risk_profile.protective_factors),
        nutrition = render_list(&a.advice.nutrition),
        activity = render_list(&a.advice.physical_activity),
        lifestyle = render_list(&a.advice.lifestyle),
    );
    page("Assessment Result", NAV_HTML, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use obesiq_config::Config;
    use obesiq_model::MockClassifier;
    use std::sync::Arc;

    fn mock_state() -> AppState {
        AppState::with_classifier(Config::default(), Arc::new(MockClassifier::new()))
    }

    #[tokio::test]
    async fn test_pipeline_on_default_profile() {
        let state = mock_state();
        let assessment = run_assessment(&state, &UserProfile::default()).await.unwrap();
        assert_eq!(assessment.class_index, 1);
        assert_eq!(assessment.label, "Normal weight");
        assert_eq!(assessment.probabilities.len(), 7);
        assert_eq!(assessment.bmi_category, "Normal weight");
        assert_eq!(assessment.risk_level, "Low");
    }

    #[tokio::test]
    async fn test_form_preselects_profile_defaults() {
        let Html(html) = assess_page().await;
        assert!(html.contains(r#"<option value="Female" selected>"#));
        assert!(html.contains(r#"<option value="No" selected>"#));
        assert!(html.contains(r#"<option value="Sometimes" selected>"#));
        assert!(html.contains(r#"<option value="Walking" selected>"#));
        assert!(!html.contains(r#"<option value="Never" selected>"#));
    }

    #[tokio::test]
    async fn test_pipeline_rejects_invalid_age() {
        let state = mock_state();
        let profile = UserProfile {
            age: 7,
            ..UserProfile::default()
        };
        let err = run_assessment(&state, &profile).await.unwrap_err();
        assert!(matches!(err, ObesiqError::Validation(_)));
    }

    #[tokio::test]
    async fn test_pipeline_obese_profile_flags_bmi_risk() {
        let state = mock_state();
        let profile = UserProfile {
            weight_kg: 95.0,
            ..UserProfile::default()
        };
        let assessment = run_assessment(&state, &profile).await.unwrap();
        assert_eq!(assessment.weight_category, "Obesity");
        assert_eq!(assessment.risk_level, "High");
        assert!(assessment
            .risk_profile
            .risk_factors
            .contains(&"High BMI (>=30)".to_string()));
    }
}
