//! Input normalization: user profile → the exact feature record the
//! classifier artifact was trained on.
//!
//! The normalizer is pure and never fails: range validation has already
//! happened on the profile, and the yes/no coercion is deliberately
//! fail-open for behavioral compatibility with the training pipeline.

use serde::Serialize;

use crate::profile::UserProfile;

/// Constant placeholder for the artifact's synthetic identifier column.
/// Carries no semantic meaning; it only satisfies the schema shape.
pub const IDENTIFIER_PLACEHOLDER: u32 = 0;

/// Feature record in the exact column set and order the classifier
/// expects. The four trailing string columns are kept un-encoded; the
/// classifier's own preprocessing owns categorical encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub identifier: u32,
    pub age: u32,
    pub height_m: f64,
    pub weight_kg: f64,
    pub family_history_overweight: u8,
    pub frequent_caloric_consumption: u8,
    pub vegetable_frequency: u8,
    pub meals_per_day: u8,
    pub smoker: u8,
    pub water_liters_per_day: u8,
    pub calorie_tracking: u8,
    pub weekly_activity: u8,
    pub screen_time: u8,
    pub sex: String,
    pub snacking: String,
    pub alcohol: String,
    pub transport: String,
}

impl FeatureRecord {
    /// Column names in artifact order.
    pub fn column_names() -> [&'static str; 17] {
        [
            "identifier",
            "age",
            "height_m",
            "weight_kg",
            "family_history_overweight",
            "frequent_caloric_consumption",
            "vegetable_frequency",
            "meals_per_day",
            "smoker",
            "water_liters_per_day",
            "calorie_tracking",
            "weekly_activity",
            "screen_time",
            "sex",
            "snacking",
            "alcohol",
            "transport",
        ]
    }
}

/// Binary coercion for yes/no style answers: "oui"/"yes"/"true"
/// (case-insensitive) → 1, anything else → 0.
///
/// Fail-open on unrecognized values is kept on purpose: the training
/// pipeline behaves this way, and a stricter parse here would shift the
/// feature distribution the model saw.
pub fn coerce_yes_no(value: &str) -> u8 {
    match value.trim().to_lowercase().as_str() {
        "oui" | "yes" | "true" => 1,
        _ => 0,
    }
}

/// Build the feature record for one profile.
///
/// `frequent_caloric_consumption` is derived (vegetable frequency ≥ 3),
/// never asked of the user.
pub fn normalize(profile: &UserProfile) -> FeatureRecord {
    FeatureRecord {
        identifier: IDENTIFIER_PLACEHOLDER,
        age: profile.age,
        height_m: profile.height_m,
        weight_kg: profile.weight_kg,
        family_history_overweight: coerce_yes_no(&profile.family_history),
        frequent_caloric_consumption: u8::from(profile.vegetable_freq >= 3),
        vegetable_frequency: profile.vegetable_freq,
        meals_per_day: profile.meals_per_day,
        smoker: coerce_yes_no(&profile.smoker),
        water_liters_per_day: profile.water_intake,
        calorie_tracking: coerce_yes_no(&profile.calorie_tracking),
        weekly_activity: profile.activity_freq,
        screen_time: profile.screen_time,
        sex: profile.sex.as_str().to_string(),
        snacking: profile.snacking.as_str().to_string(),
        alcohol: profile.alcohol.as_str().to_string(),
        transport: profile.transport.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Frequency, Sex, Transport};

    #[test]
    fn test_coerce_yes_no_accepts_known_affirmatives() {
        assert_eq!(coerce_yes_no("yes"), 1);
        assert_eq!(coerce_yes_no("Yes"), 1);
        assert_eq!(coerce_yes_no("OUI"), 1);
        assert_eq!(coerce_yes_no("true"), 1);
        assert_eq!(coerce_yes_no("  yes  "), 1);
    }

    #[test]
    fn test_coerce_yes_no_fails_open() {
        assert_eq!(coerce_yes_no("no"), 0);
        assert_eq!(coerce_yes_no(""), 0);
        assert_eq!(coerce_yes_no("y"), 0);
        assert_eq!(coerce_yes_no("maybe"), 0);
        assert_eq!(coerce_yes_no("1"), 0);
    }

    #[test]
    fn test_derived_caloric_flag_threshold() {
        let mut profile = UserProfile::default();
        profile.vegetable_freq = 2;
        assert_eq!(normalize(&profile).frequent_caloric_consumption, 0);
        profile.vegetable_freq = 3;
        assert_eq!(normalize(&profile).frequent_caloric_consumption, 1);
    }

    #[test]
    fn test_identifier_is_constant_placeholder() {
        assert_eq!(normalize(&UserProfile::default()).identifier, IDENTIFIER_PLACEHOLDER);
    }

    #[test]
    fn test_categorical_fields_pass_through_unencoded() {
        let profile = UserProfile {
            sex: Sex::Male,
            snacking: Frequency::Always,
            alcohol: Frequency::Never,
            transport: Transport::PublicTransit,
            ..UserProfile::default()
        };
        let record = normalize(&profile);
        assert_eq!(record.sex, "Male");
        assert_eq!(record.snacking, "Always");
        assert_eq!(record.alcohol, "Never");
        assert_eq!(record.transport, "Public_Transit");
    }

    #[test]
    fn test_serialized_field_order_matches_columns() {
        // Struct serialization streams fields in declaration order, which
        // must match the artifact's column order.
        let record = normalize(&UserProfile::default());
        let json = serde_json::to_string(&record).unwrap();
        let positions: Vec<usize> = FeatureRecord::column_names()
            .iter()
            .map(|name| json.find(&format!("\"{name}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "column order drifted: {json}");
    }
}
